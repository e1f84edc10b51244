pub mod player;
pub use player::*;

pub mod human_player;
pub use human_player::*;

pub mod computer_player;
pub use computer_player::*;

pub mod ai;
pub use ai::{SearchEngine, SearchResult, Tier};
