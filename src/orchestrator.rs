//! Match lifecycle and turn coordination.
//!
//! This module contains the [`Orchestrator`], the collaborator that sits
//! between the input layer and a [`GameSession`]. It manages:
//! - Player instantiation from a [`GameConfig`]
//! - Turn management (human input, computer turns, timeouts)
//! - The engine-busy window during which human input is refused
//! - Rematches and the running [`Scoreboard`]
//!
//! # Example Flow
//!
//! ```text
//! [GameConfig] -> [Create Players] -> [Active Game]
//!   -> human: handle_input(cell) -> [Process Move]
//!   -> computer: request_computer_move() (busy) -> commit_computer_move()
//!   -> [Check End] -> [Notify Players + Scoreboard] -> ... -> rematch()
//! ```
//!
//! Splitting a computer turn into request and commit lets a front end show
//! a thinking delay; between the two calls `is_busy()` is true and human
//! input is rejected with [`IllegalMove::EngineBusy`].

use crate::agent::ai::{SearchEngine, Tier};
use crate::agent::computer_player::ComputerPlayer;
use crate::agent::human_player::HumanPlayer;
use crate::agent::player::{GameResult, Player};
use crate::config::{GameConfig, PlayerConfig, TimeoutAction};
use crate::error::{EngineError, IllegalMove, Result};
use crate::game_repr::{Mark, Move};
use crate::scoreboard::Scoreboard;
use crate::session::{GameEvent, GameSession, GameStatus};

/// Root component driving a match between two players.
pub struct Orchestrator {
    config: GameConfig,

    session: GameSession,

    /// (x_player, o_player)
    players: (Box<dyn Player>, Box<dyn Player>),

    scoreboard: Scoreboard,

    /// Computer move chosen but not yet applied; the engine is busy while set
    pending: Option<Move>,

    /// Mark that started the current game
    start: Mark,

    /// Random source for timeout moves
    timeout_engine: SearchEngine,
}

impl Orchestrator {
    /// Create players from the config's seats and start the first game.
    pub fn new(config: GameConfig) -> Result<Self> {
        let x = Self::create_player(&config, Mark::X);
        let o = Self::create_player(&config, Mark::O);
        Self::with_players(config, x, o)
    }

    /// Start the first game with caller-supplied players.
    pub fn with_players(config: GameConfig, x: Box<dyn Player>, o: Box<dyn Player>) -> Result<Self> {
        config.validate()?;

        let mut session = GameSession::new(config.size, config.win_length, config.start)?;
        if let Some(computer) = config.computer_mark() {
            session = session.with_computer(computer);
        }

        log::info!(
            "new {:?} match on {}x{} (win length {}): {} vs {}",
            config.mode,
            config.size,
            config.size,
            config.win_length,
            x.name(),
            o.name()
        );

        Ok(Self {
            start: config.start,
            timeout_engine: Self::engine_for(&config, 2),
            session,
            players: (x, o),
            scoreboard: Scoreboard::new(),
            pending: None,
            config,
        })
    }

    fn create_player(config: &GameConfig, mark: Mark) -> Box<dyn Player> {
        match config.player_config(mark) {
            PlayerConfig::Human => Box::new(HumanPlayer::new(format!("Player {}", mark))),
            PlayerConfig::Computer { tier } => {
                let offset = match mark {
                    Mark::X => 0,
                    Mark::O => 1,
                };
                Box::new(ComputerPlayer::with_tier(mark, tier).with_engine(Self::engine_for(config, offset)))
            }
        }
    }

    /// Seeded engines get distinct streams per seat.
    fn engine_for(config: &GameConfig, offset: u64) -> SearchEngine {
        let engine = match config.seed {
            Some(seed) => SearchEngine::with_seed(seed.wrapping_add(offset)),
            None => SearchEngine::new(),
        };
        engine.with_parallel(config.parallel)
    }

    fn player_mut(&mut self, mark: Mark) -> &mut dyn Player {
        match mark {
            Mark::X => self.players.0.as_mut(),
            Mark::O => self.players.1.as_mut(),
        }
    }

    pub fn player(&self, mark: Mark) -> &dyn Player {
        match mark {
            Mark::X => self.players.0.as_ref(),
            Mark::O => self.players.1.as_ref(),
        }
    }

    /// Forward a selected cell to the human whose turn it is.
    ///
    /// Returns the resulting event, or `None` if the player did not turn
    /// the input into a move.
    pub fn handle_input(&mut self, index: usize) -> Result<Option<GameEvent>> {
        if self.is_busy() {
            log::warn!("input {} ignored: computer is thinking", index);
            return Err(IllegalMove::EngineBusy.into());
        }
        if self.session.is_over() {
            return Err(IllegalMove::GameOver.into());
        }

        let mark = self.session.current_player();
        if !self.player(mark).is_human() {
            return Err(IllegalMove::NotHumanTurn.into());
        }

        self.player_mut(mark).handle_input(index);
        let chosen = match mark {
            Mark::X => self.players.0.get_move(&self.session),
            Mark::O => self.players.1.get_move(&self.session),
        };
        match chosen {
            Some(idx) => self.process_move(idx, mark).map(Some),
            None => Ok(None),
        }
    }

    /// Ask the computer to move and hold the answer until
    /// [`commit_computer_move`](Self::commit_computer_move).
    ///
    /// Returns `None` when the side to move is human.
    pub fn request_computer_move(&mut self) -> Result<Option<usize>> {
        if self.is_busy() {
            return Err(IllegalMove::EngineBusy.into());
        }
        if self.session.is_over() {
            return Err(IllegalMove::GameOver.into());
        }

        let mark = self.session.current_player();
        if self.player(mark).is_human() {
            return Ok(None);
        }

        let chosen = match mark {
            Mark::X => self.players.0.get_move(&self.session),
            Mark::O => self.players.1.get_move(&self.session),
        };
        let index = chosen.ok_or(EngineError::NoLegalMove)?;
        self.pending = Some(Move::new(index, mark));
        Ok(Some(index))
    }

    /// Apply the held computer move, if any, and clear the busy flag.
    pub fn commit_computer_move(&mut self) -> Result<Option<GameEvent>> {
        match self.pending.take() {
            Some(mv) => self.process_move(mv.index, mv.mark).map(Some),
            None => Ok(None),
        }
    }

    /// Request and commit in one step.
    pub fn play_computer_turn(&mut self) -> Result<Option<GameEvent>> {
        match self.request_computer_move()? {
            Some(_) => self.commit_computer_move(),
            None => Ok(None),
        }
    }

    /// Let computer players move until the game ends or a human is to move.
    pub fn play_to_end(&mut self) -> Result<GameStatus> {
        while !self.session.is_over() {
            if self.play_computer_turn()?.is_none() {
                break;
            }
        }
        Ok(self.session.status().clone())
    }

    /// Submit a move and fan the outcome out to players and the scoreboard.
    fn process_move(&mut self, index: usize, mark: Mark) -> Result<GameEvent> {
        let event = match self.session.submit_move(index, mark) {
            Ok(event) => event,
            Err(err) => {
                log::warn!("rejected {} at {}: {}", mark, index, err);
                return Err(err);
            }
        };

        self.player_mut(mark.opponent()).opponent_moved(Move::new(index, mark));
        self.scoreboard.record(&event);

        if let Some(result) = GameResult::from_status(self.session.status()) {
            self.handle_game_end(result);
        }
        Ok(event)
    }

    fn handle_game_end(&mut self, result: GameResult) {
        log::info!("game over: {:?} ({})", result, self.scoreboard);
        self.players.0.game_ended(result);
        self.players.1.game_ended(result);
    }

    /// Take back the latest turn (see [`GameSession::undo`]).
    pub fn undo(&mut self) -> Result<usize> {
        if self.is_busy() {
            return Err(IllegalMove::EngineBusy.into());
        }
        self.session.undo()
    }

    /// Apply the configured timeout policy to the side to move.
    ///
    /// Without a configured timeout the default policy (pass) applies.
    pub fn on_turn_timeout(&mut self) -> Result<GameEvent> {
        if self.is_busy() {
            return Err(IllegalMove::EngineBusy.into());
        }
        if self.session.is_over() {
            return Err(IllegalMove::GameOver.into());
        }

        let mark = self.session.current_player();
        let action = self.config.turn_timeout.map(|t| t.action).unwrap_or_default();
        log::info!("{} ran out of time ({:?})", mark, action);

        match action {
            TimeoutAction::Pass => self.session.pass_turn(),
            TimeoutAction::RandomMove => {
                let index = self.session.choose_move(Tier::Random, &mut self.timeout_engine)?;
                self.process_move(index, mark)
            }
        }
    }

    /// Clear the board for another game, keeping the scoreboard.
    ///
    /// With swap-start enabled the other mark opens the new game.
    pub fn rematch(&mut self) -> Mark {
        self.pending = None;
        if self.config.swap_start {
            self.start = self.start.opponent();
        }
        self.session.reset(self.start);
        log::debug!("rematch, {} starts", self.start);
        self.start
    }

    pub fn reset_scores(&mut self) {
        self.scoreboard.reset();
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_move(&self) -> Option<Move> {
        self.pending
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn start_player(&self) -> Mark {
        self.start
    }

    pub fn current_player(&self) -> Mark {
        self.session.current_player()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TurnTimeout;

    fn pvai_x_human() -> Orchestrator {
        Orchestrator::new(GameConfig::pvai(3, Mark::X, Tier::Minimax).with_seed(5)).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(Orchestrator::new(GameConfig::pvp(3).with_win_length(4)).is_err());
    }

    #[test]
    fn test_pvp_input_alternates() {
        let mut orch = Orchestrator::new(GameConfig::pvp(3)).unwrap();
        assert_eq!(orch.handle_input(4).unwrap(), Some(GameEvent::Continue { next: Mark::O }));
        assert_eq!(orch.handle_input(0).unwrap(), Some(GameEvent::Continue { next: Mark::X }));
        assert_eq!(orch.session().history().len(), 2);
    }

    #[test]
    fn test_occupied_input_rejected_without_change() {
        let mut orch = Orchestrator::new(GameConfig::pvp(3)).unwrap();
        orch.handle_input(4).unwrap();
        let err = orch.handle_input(4).unwrap_err();
        assert_eq!(err, EngineError::IllegalMove(IllegalMove::Occupied { index: 4 }));
        assert_eq!(orch.current_player(), Mark::O);
    }

    #[test]
    fn test_input_refused_on_computer_turn() {
        let mut orch = pvai_x_human();
        orch.handle_input(4).unwrap();
        assert_eq!(orch.handle_input(0), Err(IllegalMove::NotHumanTurn.into()));
    }

    #[test]
    fn test_busy_window_blocks_human_input() {
        let mut orch = pvai_x_human();
        orch.handle_input(4).unwrap();

        let chosen = orch.request_computer_move().unwrap().unwrap();
        assert!(orch.is_busy());
        assert_eq!(orch.pending_move(), Some(Move::new(chosen, Mark::O)));
        assert_eq!(orch.handle_input(8), Err(IllegalMove::EngineBusy.into()));
        assert_eq!(orch.undo(), Err(IllegalMove::EngineBusy.into()));
        // board untouched until commit
        assert!(orch.session().board().is_empty_at(chosen));

        let event = orch.commit_computer_move().unwrap();
        assert_eq!(event, Some(GameEvent::Continue { next: Mark::X }));
        assert!(!orch.is_busy());
        assert!(!orch.session().board().is_empty_at(chosen));
    }

    #[test]
    fn test_computer_request_on_human_turn_is_none() {
        let mut orch = pvai_x_human();
        assert_eq!(orch.request_computer_move().unwrap(), None);
        assert!(!orch.is_busy());
    }

    #[test]
    fn test_undo_restores_human_turn() {
        let mut orch = pvai_x_human();
        orch.handle_input(4).unwrap();
        orch.play_computer_turn().unwrap();
        assert_eq!(orch.undo().unwrap(), 2);
        assert_eq!(orch.current_player(), Mark::X);
        assert!(orch.session().history().is_empty());
    }

    #[test]
    fn test_aivai_plays_to_completion_and_scores() {
        let config = GameConfig::aivai(3, Tier::Minimax, Tier::Minimax).with_seed(1);
        let mut orch = Orchestrator::new(config).unwrap();
        let status = orch.play_to_end().unwrap();
        assert_eq!(status, GameStatus::Drawn);
        assert_eq!(orch.scoreboard().draws(), 1);
        assert_eq!(orch.scoreboard().games(), 1);
    }

    #[test]
    fn test_rematch_swaps_start_and_keeps_score() {
        let config = GameConfig::aivai(3, Tier::Random, Tier::Random)
            .with_seed(11)
            .with_swap_start(true);
        let mut orch = Orchestrator::new(config).unwrap();
        orch.play_to_end().unwrap();

        assert_eq!(orch.rematch(), Mark::O);
        assert_eq!(orch.current_player(), Mark::O);
        assert!(orch.session().history().is_empty());
        assert_eq!(orch.scoreboard().games(), 1);

        assert_eq!(orch.rematch(), Mark::X);
    }

    #[test]
    fn test_rematch_without_swap_keeps_start() {
        let mut orch = Orchestrator::new(GameConfig::pvp(3).with_start_player(Mark::O)).unwrap();
        assert_eq!(orch.current_player(), Mark::O);
        orch.handle_input(0).unwrap();
        assert_eq!(orch.rematch(), Mark::O);
    }

    #[test]
    fn test_timeout_pass_flips_turn_without_move() {
        let mut orch = Orchestrator::new(GameConfig::pvp(3).with_turn_timeout(TurnTimeout::default())).unwrap();
        let event = orch.on_turn_timeout().unwrap();
        assert_eq!(event, GameEvent::Continue { next: Mark::O });
        assert!(orch.session().history().is_empty());
    }

    #[test]
    fn test_timeout_random_move_places_mark() {
        let timeout = TurnTimeout {
            seconds: 3,
            action: TimeoutAction::RandomMove,
        };
        let config = GameConfig::pvp(3).with_turn_timeout(timeout).with_seed(8);
        let mut orch = Orchestrator::new(config).unwrap();
        orch.on_turn_timeout().unwrap();
        let last = orch.session().last_move().unwrap();
        assert_eq!(last.mark, Mark::X);
        assert_eq!(orch.current_player(), Mark::O);
    }

    #[test]
    fn test_reset_scores() {
        let config = GameConfig::aivai(3, Tier::Greedy, Tier::Random).with_seed(4);
        let mut orch = Orchestrator::new(config).unwrap();
        orch.play_to_end().unwrap();
        orch.reset_scores();
        assert_eq!(orch.scoreboard().games(), 0);
    }
}
