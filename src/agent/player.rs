//! Player trait and associated types for game agents.
//!
//! This module provides the core abstraction for entities that can provide
//! moves. Human and computer players implement the `Player` trait to take
//! part in games driven by the [`Orchestrator`](crate::orchestrator::Orchestrator).
//!
//! # Design Philosophy
//!
//! The `Player` trait focuses on **behavior** rather than construction.
//! `HumanPlayer` only needs a name, `ComputerPlayer` needs a tier and a
//! search engine, so each implementation provides its own constructor.
//!
//! # Polling
//!
//! `get_move()` never blocks. A human player returns `None` until the input
//! collaborator has forwarded a cell through `handle_input()`; a computer
//! player runs its search and answers immediately.

use crate::game_repr::{Mark, Move};
use crate::session::{GameSession, GameStatus};

/// Result of a completed game.
///
/// Passed to players via `game_ended()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    XWins,
    OWins,
    Draw,
}

impl GameResult {
    /// Create a GameResult from the winning mark
    pub fn from_winner(winner: Mark) -> Self {
        match winner {
            Mark::X => GameResult::XWins,
            Mark::O => GameResult::OWins,
        }
    }

    /// `None` while the game is still in progress.
    pub fn from_status(status: &GameStatus) -> Option<Self> {
        match status {
            GameStatus::InProgress => None,
            GameStatus::Won { winner, .. } => Some(Self::from_winner(*winner)),
            GameStatus::Drawn => Some(GameResult::Draw),
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameResult::XWins => Some(Mark::X),
            GameResult::OWins => Some(Mark::O),
            GameResult::Draw => None,
        }
    }
}

/// Trait for entities that can provide moves.
///
/// Only `get_move()` must be implemented. All other methods have default
/// implementations that can be overridden as needed.
pub trait Player {
    /// Request the next move from this player.
    ///
    /// Called when it is this player's turn; `session` is the live game and
    /// `session.current_player()` is the mark being played.
    ///
    /// - `Some(index)`: the cell this player wants to mark
    /// - `None`: no move is available yet (human still deciding) or the
    ///   player cannot move
    fn get_move(&mut self, session: &GameSession) -> Option<usize>;

    /// Handle a cell selected by the input collaborator.
    ///
    /// Default: does nothing. Non-interactive players ignore input.
    fn handle_input(&mut self, _index: usize) {}

    /// Notify this player that the opponent made a move.
    fn opponent_moved(&mut self, _mv: Move) {}

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {}

    /// Get the display name of this player.
    fn name(&self) -> &str {
        "Player"
    }

    /// Whether moves come from outside input rather than search.
    fn is_human(&self) -> bool {
        false
    }
}
