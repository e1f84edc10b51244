//! Turn state machine: the single owner of game truth.
//!
//! A [`GameSession`] holds the authoritative [`Board`], the move history,
//! whose turn it is and the [`GameStatus`]. Every mutation goes through
//! [`submit_move`](GameSession::submit_move), [`undo`](GameSession::undo),
//! [`pass_turn`](GameSession::pass_turn) or [`reset`](GameSession::reset).
//!
//! # State machine
//!
//! ```text
//! InProgress --move, no win, board not full--> InProgress (turn flips)
//! InProgress --move completes a line---------> Won(mark, line)
//! InProgress --move fills the board----------> Drawn
//! Won | Drawn --undo--------------------------> InProgress
//! any         --reset-------------------------> InProgress (empty board)
//! ```
//!
//! The session never schedules anything. Each accepted move returns a
//! [`GameEvent`] (and forwards it to registered [`GameListener`]s); it is
//! the caller's job to decide whether a computer player moves next.

use crate::agent::ai::{SearchEngine, Tier};
use crate::error::{EngineError, IllegalMove, Result};
use crate::game_repr::{find_win, Board, Line, LineSet, Mark, Move};
use std::fmt;
use std::sync::Arc;

/// Where the game stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { winner: Mark, line: Line },
    Drawn,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

/// What an accepted move (or pass) led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// `winner` completed `line`; indices are included for highlighting.
    Win { winner: Mark, line: Line },
    Draw,
    /// Game continues with `next` to move.
    Continue { next: Mark },
}

impl GameEvent {
    /// The session status this event leaves behind.
    pub fn status(&self) -> GameStatus {
        match self {
            GameEvent::Win { winner, line } => GameStatus::Won {
                winner: *winner,
                line: line.clone(),
            },
            GameEvent::Draw => GameStatus::Drawn,
            GameEvent::Continue { .. } => GameStatus::InProgress,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameEvent::Continue { .. })
    }
}

/// Collaborator notified of every event a session raises.
pub trait GameListener {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> GameListener for F {
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

pub struct GameSession {
    lines: Arc<LineSet>,
    board: Board,
    history: Vec<Move>,
    current: Mark,
    status: GameStatus,
    /// Mark played by the computer, if any. Changes how undo rewinds.
    computer: Option<Mark>,
    listeners: Vec<Box<dyn GameListener>>,
}

impl GameSession {
    /// Start an empty game on a `size`×`size` board with `start` to move.
    pub fn new(size: usize, win_length: usize, start: Mark) -> Result<Self> {
        let lines = LineSet::cached(size, win_length)?;
        Ok(Self {
            lines,
            board: Board::new(size),
            history: Vec::new(),
            current: start,
            status: GameStatus::InProgress,
            computer: None,
            listeners: Vec::new(),
        })
    }

    /// Mark this session as human-vs-computer with the computer playing `mark`.
    pub fn with_computer(mut self, mark: Mark) -> Self {
        self.computer = Some(mark);
        self
    }

    pub fn add_listener(&mut self, listener: Box<dyn GameListener>) {
        self.listeners.push(listener);
    }

    /// Place `mark` at `index`.
    ///
    /// Fails without touching any state if the game is over, if it is not
    /// `mark`'s turn, or if the board rejects the cell.
    pub fn submit_move(&mut self, index: usize, mark: Mark) -> Result<GameEvent> {
        if self.status.is_over() {
            return Err(IllegalMove::GameOver.into());
        }
        if mark != self.current {
            return Err(IllegalMove::WrongPlayer {
                expected: self.current,
                got: mark,
            }
            .into());
        }
        self.board.apply(index, mark)?;
        self.history.push(Move::new(index, mark));
        log::debug!("{} played {} (move {})", mark, index, self.history.len());

        let win = find_win(&self.board, &self.lines).map(|win| (win.mark, win.line.clone()));
        let event = if let Some((winner, line)) = win {
            log::info!("{} wins with line {:?}", winner, line.cells());
            GameEvent::Win { winner, line }
        } else if self.board.is_full() {
            log::info!("game drawn after {} moves", self.history.len());
            GameEvent::Draw
        } else {
            self.current = mark.opponent();
            GameEvent::Continue { next: self.current }
        };

        self.status = event.status();
        self.notify(&event);
        Ok(event)
    }

    /// Take back the latest turn.
    ///
    /// Human-vs-human: pops one move. Human-vs-computer: pops back through
    /// the most recent human move, so a computer reply is removed together
    /// with the move it answered and the human is to move again. If the
    /// moves needed are not all there, nothing is undone.
    ///
    /// Returns how many moves were taken back (0 means no-op).
    pub fn undo(&mut self) -> Result<usize> {
        let keep = match self.computer {
            None => match self.history.len() {
                0 => return Ok(0),
                len => len - 1,
            },
            Some(computer) => match self.history.iter().rposition(|mv| mv.mark != computer) {
                Some(pos) => pos,
                None => return Ok(0),
            },
        };

        for mv in self.history[keep..].iter().rev() {
            self.board.revert(mv.index)?;
        }
        let popped = self.history.len() - keep;
        self.current = self.history[keep].mark;
        self.history.truncate(keep);
        self.status = GameStatus::InProgress;
        log::debug!("undid {} move(s), {} to move", popped, self.current);
        Ok(popped)
    }

    /// Give the turn away without placing a mark (timeout policy).
    pub fn pass_turn(&mut self) -> Result<GameEvent> {
        if self.status.is_over() {
            return Err(IllegalMove::GameOver.into());
        }
        log::debug!("{} passes", self.current);
        self.current = self.current.opponent();
        let event = GameEvent::Continue { next: self.current };
        self.notify(&event);
        Ok(event)
    }

    /// Clear the board and history and start again with `start` to move.
    pub fn reset(&mut self, start: Mark) {
        self.board = Board::new(self.board.size());
        self.history.clear();
        self.current = start;
        self.status = GameStatus::InProgress;
        log::debug!("session reset, {} to move", start);
    }

    /// Ask `engine` for a move for the side to move, using `tier`.
    ///
    /// The search runs on a private copy of the board, so the session is
    /// never observed in a half-searched state.
    pub fn choose_move(&self, tier: Tier, engine: &mut SearchEngine) -> Result<usize> {
        if self.status.is_over() {
            return Err(IllegalMove::GameOver.into());
        }
        if self.board.is_full() {
            return Err(EngineError::NoLegalMove);
        }
        engine.choose_move(&self.board, &self.lines, self.current, tier)
    }

    fn notify(&mut self, event: &GameEvent) {
        for listener in self.listeners.iter_mut() {
            listener.on_event(event);
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn lines(&self) -> &LineSet {
        &self.lines
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn win_length(&self) -> usize {
        self.lines.win_length()
    }

    pub fn current_player(&self) -> Mark {
        self.current
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    pub fn computer_player(&self) -> Option<Mark> {
        self.computer
    }

    pub fn legal_moves(&self) -> Vec<usize> {
        if self.status.is_over() {
            return Vec::new();
        }
        self.board.empty_cells().collect()
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("history", &self.history)
            .field("current", &self.current)
            .field("status", &self.status)
            .field("computer", &self.computer)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
