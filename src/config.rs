//! Game configuration types.
//!
//! A [`GameConfig`] holds everything needed to start a match: board size,
//! run length, who sits in each seat, who starts and the turn timeout
//! policy. The CLI builds one from its arguments; tests build them directly.

use crate::agent::ai::Tier;
use crate::error::{EngineError, Result};
use crate::game_repr::Mark;

/// Run length used when none is given: 3 on boards up to 3×3, 4 above.
pub fn win_length_for(size: usize) -> usize {
    if size <= 3 {
        3
    } else {
        4
    }
}

/// Configuration for a single seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerConfig {
    /// Human player whose moves arrive as input
    Human,
    /// Computer player running the given tier
    Computer { tier: Tier },
}

impl PlayerConfig {
    pub fn is_human(&self) -> bool {
        matches!(self, PlayerConfig::Human)
    }
}

/// Who is playing, derived from the two seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs Player - two humans
    PvP,
    /// Player vs AI - one human, one computer
    PvAI,
    /// AI vs AI - two computers (for watching/testing)
    AIvAI,
}

/// What happens when the side to move runs out of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeoutAction {
    /// Hand the turn to the opponent without placing a mark
    #[default]
    Pass,
    /// Place a uniformly random mark for the side to move
    RandomMove,
}

/// Per-turn deadline. The engine never keeps time itself; the collaborator
/// runs the clock and calls [`Orchestrator::on_turn_timeout`](crate::orchestrator::Orchestrator::on_turn_timeout).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnTimeout {
    pub seconds: u32,
    pub action: TimeoutAction,
}

impl Default for TurnTimeout {
    fn default() -> Self {
        Self {
            seconds: 10,
            action: TimeoutAction::Pass,
        }
    }
}

/// Complete match configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Board side length
    pub size: usize,
    /// Marks in a row needed to win
    pub win_length: usize,
    pub x_player: PlayerConfig,
    pub o_player: PlayerConfig,
    /// Mark that moves first in the first game
    pub start: Mark,
    /// Alternate the starting mark on every rematch
    pub swap_start: bool,
    pub turn_timeout: Option<TurnTimeout>,
    /// Seed for the computer players' random sources
    pub seed: Option<u64>,
    /// Root-parallel minimax for computer players
    pub parallel: bool,
}

impl GameConfig {
    /// Configuration from explicit seats; the mode follows from them.
    pub fn from_seats(size: usize, x_player: PlayerConfig, o_player: PlayerConfig) -> Self {
        let mode = match (x_player.is_human(), o_player.is_human()) {
            (true, true) => GameMode::PvP,
            (false, false) => GameMode::AIvAI,
            _ => GameMode::PvAI,
        };
        Self {
            mode,
            size,
            win_length: win_length_for(size),
            x_player,
            o_player,
            start: Mark::X,
            swap_start: false,
            turn_timeout: None,
            seed: None,
            parallel: false,
        }
    }

    /// Create a PvP game configuration.
    pub fn pvp(size: usize) -> Self {
        Self::from_seats(size, PlayerConfig::Human, PlayerConfig::Human)
    }

    /// Create a PvAI game configuration with the human on `human_mark`.
    pub fn pvai(size: usize, human_mark: Mark, tier: Tier) -> Self {
        let computer = PlayerConfig::Computer { tier };
        match human_mark {
            Mark::X => Self::from_seats(size, PlayerConfig::Human, computer),
            Mark::O => Self::from_seats(size, computer, PlayerConfig::Human),
        }
    }

    /// Create an AIvAI game configuration.
    pub fn aivai(size: usize, tier_x: Tier, tier_o: Tier) -> Self {
        Self::from_seats(
            size,
            PlayerConfig::Computer { tier: tier_x },
            PlayerConfig::Computer { tier: tier_o },
        )
    }

    pub fn with_win_length(mut self, win_length: usize) -> Self {
        self.win_length = win_length;
        self
    }

    pub fn with_start_player(mut self, start: Mark) -> Self {
        self.start = start;
        self
    }

    pub fn with_swap_start(mut self, swap_start: bool) -> Self {
        self.swap_start = swap_start;
        self
    }

    pub fn with_turn_timeout(mut self, timeout: TurnTimeout) -> Self {
        self.turn_timeout = Some(timeout);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Reject sizes and run lengths that cannot describe a game.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(EngineError::configuration(self.size, self.win_length, "board size must be positive"));
        }
        if self.win_length == 0 {
            return Err(EngineError::configuration(self.size, self.win_length, "win length must be positive"));
        }
        if self.win_length > self.size {
            return Err(EngineError::configuration(
                self.size,
                self.win_length,
                "win length cannot exceed board size",
            ));
        }
        Ok(())
    }

    pub fn player_config(&self, mark: Mark) -> PlayerConfig {
        match mark {
            Mark::X => self.x_player,
            Mark::O => self.o_player,
        }
    }

    /// The human's mark in a PvAI game; `None` for PvP or AIvAI.
    pub fn human_mark(&self) -> Option<Mark> {
        match self.mode {
            GameMode::PvAI if self.x_player.is_human() => Some(Mark::X),
            GameMode::PvAI => Some(Mark::O),
            _ => None,
        }
    }

    /// The computer's mark in a PvAI game; `None` for PvP or AIvAI.
    pub fn computer_mark(&self) -> Option<Mark> {
        self.human_mark().map(Mark::opponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_length_derivation() {
        assert_eq!(win_length_for(3), 3);
        assert_eq!(win_length_for(4), 4);
        assert_eq!(win_length_for(5), 4);
        assert_eq!(win_length_for(7), 4);
    }

    #[test]
    fn test_pvp_config() {
        let config = GameConfig::pvp(3);
        assert_eq!(config.mode, GameMode::PvP);
        assert_eq!(config.x_player, PlayerConfig::Human);
        assert_eq!(config.o_player, PlayerConfig::Human);
        assert_eq!(config.human_mark(), None);
        assert_eq!(config.win_length, 3);
        assert_eq!(config.start, Mark::X);
    }

    #[test]
    fn test_pvai_config_human_o() {
        let config = GameConfig::pvai(4, Mark::O, Tier::Greedy);
        assert_eq!(config.mode, GameMode::PvAI);
        assert_eq!(config.x_player, PlayerConfig::Computer { tier: Tier::Greedy });
        assert_eq!(config.o_player, PlayerConfig::Human);
        assert_eq!(config.human_mark(), Some(Mark::O));
        assert_eq!(config.computer_mark(), Some(Mark::X));
        assert_eq!(config.win_length, 4);
    }

    #[test]
    fn test_aivai_config() {
        let config = GameConfig::aivai(3, Tier::Random, Tier::Minimax);
        assert_eq!(config.mode, GameMode::AIvAI);
        assert_eq!(config.player_config(Mark::O), PlayerConfig::Computer { tier: Tier::Minimax });
        assert_eq!(config.computer_mark(), None);
    }

    #[test]
    fn test_builders() {
        let timeout = TurnTimeout {
            seconds: 5,
            action: TimeoutAction::RandomMove,
        };
        let config = GameConfig::pvp(5)
            .with_win_length(5)
            .with_start_player(Mark::O)
            .with_swap_start(true)
            .with_turn_timeout(timeout)
            .with_seed(3)
            .with_parallel(true);
        assert_eq!(config.win_length, 5);
        assert_eq!(config.start, Mark::O);
        assert!(config.swap_start);
        assert_eq!(config.turn_timeout, Some(timeout));
        assert_eq!(config.seed, Some(3));
        assert!(config.parallel);
    }

    #[test]
    fn test_default_timeout_passes_after_ten_seconds() {
        let timeout = TurnTimeout::default();
        assert_eq!(timeout.seconds, 10);
        assert_eq!(timeout.action, TimeoutAction::Pass);
    }

    #[test]
    fn test_validate() {
        assert!(GameConfig::pvp(3).validate().is_ok());
        assert!(GameConfig::pvp(0).validate().is_err());
        assert!(GameConfig::pvp(3).with_win_length(0).validate().is_err());
        assert!(matches!(
            GameConfig::pvp(3).with_win_length(4).validate(),
            Err(EngineError::Configuration { size: 3, win_length: 4, .. })
        ));
    }
}
