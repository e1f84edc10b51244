//! Error taxonomy for the engine.
//!
//! Every rejected operation returns one of these instead of leaving the
//! session in an ambiguous state. None of them is fatal: a configuration
//! error aborts session construction, an illegal move leaves the board
//! untouched, and a search on a full board simply has nothing to return.

use crate::game_repr::Mark;
use thiserror::Error;

/// Shorthand used across the crate.
pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Board side or run length cannot describe a game.
    #[error("invalid configuration (size {size}, win length {win_length}): {reason}")]
    Configuration {
        size: usize,
        win_length: usize,
        reason: &'static str,
    },

    /// A move was rejected; no state was mutated.
    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),

    /// Search was asked for a move on a full board.
    #[error("no legal moves remain")]
    NoLegalMove,
}

/// Why a move (or a revert) was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("cell {index} is out of range (board has {cells} cells)")]
    OutOfRange { index: usize, cells: usize },

    #[error("cell {index} is already occupied")]
    Occupied { index: usize },

    #[error("cell {index} is empty")]
    NotOccupied { index: usize },

    #[error("it is {expected}'s turn, not {got}'s")]
    WrongPlayer { expected: Mark, got: Mark },

    #[error("the game is already over")]
    GameOver,

    #[error("the computer player is still thinking")]
    EngineBusy,

    #[error("it is not a human player's turn")]
    NotHumanTurn,
}

impl EngineError {
    pub(crate) fn configuration(size: usize, win_length: usize, reason: &'static str) -> Self {
        EngineError::Configuration {
            size,
            win_length,
            reason,
        }
    }

    /// True for the errors a human-facing collaborator handles routinely.
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, EngineError::IllegalMove(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_move_converts_into_engine_error() {
        let err: EngineError = IllegalMove::Occupied { index: 4 }.into();
        assert!(err.is_illegal_move());
        assert_eq!(err.to_string(), "illegal move: cell 4 is already occupied");
    }

    #[test]
    fn test_wrong_player_message() {
        let err = IllegalMove::WrongPlayer {
            expected: Mark::X,
            got: Mark::O,
        };
        assert_eq!(err.to_string(), "it is X's turn, not O's");
    }

    #[test]
    fn test_configuration_message() {
        let err = EngineError::configuration(0, 3, "board size must be positive");
        assert!(!err.is_illegal_move());
        assert_eq!(
            err.to_string(),
            "invalid configuration (size 0, win length 3): board size must be positive"
        );
    }
}
