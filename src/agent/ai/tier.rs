//! Tier Registry - the strength levels a computer player can run at
//!
//! Each tier is a separate move policy rather than a depth setting on one
//! search: Random picks any empty cell, Greedy looks one ply ahead for wins
//! and blocks, Minimax runs the full alpha-beta search.

use crate::agent::computer_player::ComputerPlayer;
use crate::agent::player::Player;
use crate::game_repr::Mark;
use std::fmt;
use std::str::FromStr;

/// Enumeration of available move policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tier {
    /// Uniformly random empty cell
    Random,
    /// Win, else block, else center, else random
    Greedy,
    /// Alpha-beta minimax with a size-dependent depth limit
    #[default]
    Minimax,
}

impl Tier {
    /// All tiers, weakest first
    pub fn all() -> &'static [Tier] {
        &[Tier::Random, Tier::Greedy, Tier::Minimax]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tier::Random => "Random",
            Tier::Greedy => "Greedy",
            Tier::Minimax => "Minimax",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tier::Random => "Plays any empty cell",
            Tier::Greedy => "Takes a win or blocks one, otherwise prefers the center",
            Tier::Minimax => "Searches the game tree with alpha-beta pruning",
        }
    }

    /// Create a Player instance for this tier, playing `mark`.
    pub fn create_player(&self, mark: Mark) -> Box<dyn Player> {
        Box::new(ComputerPlayer::with_tier(mark, *self))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = String;

    /// Accepts tier names as well as the easy/medium/hard aliases.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" | "easy" => Ok(Tier::Random),
            "greedy" | "medium" => Ok(Tier::Greedy),
            "minimax" | "hard" => Ok(Tier::Minimax),
            other => Err(format!("unknown tier '{}'", other)),
        }
    }
}
