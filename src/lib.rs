//! k-in-a-row engine for N×N boards.
//!
//! - [`game_repr`]: marks, cells, moves, line enumeration, the board and win detection
//! - [`session`]: the turn state machine that owns game truth
//! - [`agent`]: players and the tiered computer opponent
//! - [`orchestrator`]: drives a match between two players from a [`config::GameConfig`]

pub mod agent;
pub mod config;
pub mod error;
pub mod game_repr;
pub mod orchestrator;
pub mod scoreboard;
pub mod session;

pub use error::{EngineError, IllegalMove, Result};
pub use session::{GameEvent, GameListener, GameSession, GameStatus};
