//! Human player implementation that gets moves from an input collaborator.
//!
//! # Control Flow
//!
//! ```text
//! cell selected -> Orchestrator::handle_input(index)
//!     ↓
//! player.handle_input(index)      (stores pending cell)
//!     ↓
//! Orchestrator polls player.get_move()
//!     ↓
//! Returns pending cell (Some or None)
//! ```
//!
//! The player does not validate the cell; the session rejects illegal
//! moves and the orchestrator reports them back.

use crate::agent::player::Player;
use crate::session::GameSession;

/// Human player whose moves arrive through [`Player::handle_input`].
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    /// Display name for this player
    name: String,

    /// Cell selected by the last input, returned by `get_move()`
    pending: Option<usize>,
}

impl HumanPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pending: None,
        }
    }

    pub fn pending(&self) -> Option<usize> {
        self.pending
    }
}

impl Player for HumanPlayer {
    fn get_move(&mut self, _session: &GameSession) -> Option<usize> {
        self.pending.take()
    }

    fn handle_input(&mut self, index: usize) {
        self.pending = Some(index);
    }

    fn game_ended(&mut self, _result: crate::agent::player::GameResult) {
        self.pending = None;
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }
}
