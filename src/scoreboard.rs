//! Running tally of finished games.

use crate::game_repr::Mark;
use crate::session::{GameEvent, GameListener};
use std::fmt;

/// Wins per mark and draws, counted from terminal [`GameEvent`]s.
///
/// Register it on a session (it is a [`GameListener`]) or feed it events
/// directly; non-terminal events are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Win { winner: Mark::X, .. } => self.x_wins += 1,
            GameEvent::Win { winner: Mark::O, .. } => self.o_wins += 1,
            GameEvent::Draw => self.draws += 1,
            GameEvent::Continue { .. } => {}
        }
    }

    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl GameListener for Scoreboard {
    fn on_event(&mut self, event: &GameEvent) {
        self.record(event);
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {} • O: {} • Draws: {}", self.x_wins, self.o_wins, self.draws)
    }
}
