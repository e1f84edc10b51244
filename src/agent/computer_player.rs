//! ComputerPlayer - a [`Player`] backed by the tiered search engine
//!
//! The player owns its own [`SearchEngine`], so two computer players in the
//! same match never share a random source.
//!
//! # Examples
//!
//! ```
//! use tictactoe_engine::agent::{ComputerPlayer, Player};
//! use tictactoe_engine::agent::ai::{SearchEngine, Tier};
//! use tictactoe_engine::game_repr::Mark;
//! use tictactoe_engine::session::GameSession;
//!
//! let session = GameSession::new(3, 3, Mark::X).unwrap();
//! let mut cpu = ComputerPlayer::with_tier(Mark::X, Tier::Greedy)
//!     .with_engine(SearchEngine::with_seed(1));
//! // Greedy opens in the center
//! assert_eq!(cpu.get_move(&session), Some(4));
//! ```

use crate::agent::ai::{SearchEngine, Tier};
use crate::agent::player::Player;
use crate::game_repr::Mark;
use crate::session::GameSession;

pub struct ComputerPlayer {
    mark: Mark,

    tier: Tier,

    engine: SearchEngine,

    name: String,
}

impl ComputerPlayer {
    pub fn new(mark: Mark, tier: Tier, name: String) -> Self {
        Self {
            mark,
            tier,
            engine: SearchEngine::new(),
            name,
        }
    }

    pub fn with_tier(mark: Mark, tier: Tier) -> Self {
        let name = format!("Computer ({})", tier.name());
        Self::new(mark, tier, name)
    }

    /// Replace the search engine, e.g. with a seeded or parallel one.
    pub fn with_engine(mut self, engine: SearchEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn set_tier(&mut self, tier: Tier) {
        self.tier = tier;
        // Update name if it follows the auto-generated pattern
        if self.name.starts_with("Computer (") {
            self.name = format!("Computer ({})", tier.name());
        }
    }
}

impl Player for ComputerPlayer {
    fn get_move(&mut self, session: &GameSession) -> Option<usize> {
        if session.current_player() != self.mark {
            log::warn!("[{}] asked to move for {}, plays {}", self.name, session.current_player(), self.mark);
            return None;
        }

        match session.choose_move(self.tier, &mut self.engine) {
            Ok(index) => Some(index),
            Err(err) => {
                log::warn!("[{}] no move: {}", self.name, err);
                None
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_follows_tier() {
        let mut player = ComputerPlayer::with_tier(Mark::O, Tier::Random);
        assert_eq!(player.name(), "Computer (Random)");
        player.set_tier(Tier::Minimax);
        assert_eq!(player.tier(), Tier::Minimax);
        assert_eq!(player.name(), "Computer (Minimax)");
    }

    #[test]
    fn test_custom_name_kept_on_tier_change() {
        let mut player = ComputerPlayer::new(Mark::X, Tier::Greedy, "Deep Cross".to_string());
        player.set_tier(Tier::Random);
        assert_eq!(player.name(), "Deep Cross");
    }

    #[test]
    fn test_declines_when_not_its_turn() {
        let session = GameSession::new(3, 3, Mark::X).unwrap();
        let mut player = ComputerPlayer::with_tier(Mark::O, Tier::Minimax);
        assert_eq!(player.get_move(&session), None);
    }

    #[test]
    fn test_minimax_takes_immediate_win() {
        let mut session = GameSession::new(3, 3, Mark::X).unwrap();
        for idx in [0, 3, 1, 4] {
            let mark = session.current_player();
            session.submit_move(idx, mark).unwrap();
        }
        let mut player = ComputerPlayer::with_tier(Mark::X, Tier::Minimax);
        assert_eq!(player.get_move(&session), Some(2));
    }

    #[test]
    fn test_no_move_after_game_over() {
        let mut session = GameSession::new(3, 3, Mark::X).unwrap();
        for idx in [0, 3, 1, 4, 2] {
            let mark = session.current_player();
            session.submit_move(idx, mark).unwrap();
        }
        assert!(session.is_over());
        let mut player = ComputerPlayer::with_tier(Mark::X, Tier::Greedy);
        assert_eq!(player.get_move(&session), None);
    }
}
