// Search Orchestrator
//
// This module turns a board and a tier into one chosen cell. It dispatches to
// the tier's policy (uniform random, greedy one-ply lookahead, or alpha-beta
// minimax) and always works on its own copy of the board, so callers only
// ever see the finished answer.

use super::minimax::{depth_limit, Minimax};
use super::tier::Tier;
use crate::error::{EngineError, Result};
use crate::game_repr::{find_win, Board, LineSet, Mark};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use smallvec::SmallVec;
use std::time::Instant;

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: usize,
    pub tier: Tier,
    /// Minimax score of `best_move`; `None` for tiers that do not score.
    pub score: Option<i64>,
    /// Ply cutoff used by minimax.
    pub depth_limit: Option<usize>,
    pub nodes_searched: u64,
    pub time_ms: u64,
}

/// Decision engine for the computer player.
///
/// Owns the random source used by the Random and Greedy tiers. Seed it for
/// reproducible games.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    rng: StdRng,
    parallel: bool,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            parallel: false,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            parallel: false,
        }
    }

    /// Split minimax root moves across rayon workers, each on its own board
    /// copy. The chosen move is the same as the sequential search's.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Pick a cell for `ai` to play.
    pub fn choose_move(&mut self, board: &Board, lines: &LineSet, ai: Mark, tier: Tier) -> Result<usize> {
        self.search(board, lines, ai, tier).map(|result| result.best_move)
    }

    /// Pick a cell for `ai` to play and report how the choice was made.
    pub fn search(&mut self, board: &Board, lines: &LineSet, ai: Mark, tier: Tier) -> Result<SearchResult> {
        if board.is_full() {
            return Err(EngineError::NoLegalMove);
        }

        let start_time = Instant::now();
        let mut result = match tier {
            Tier::Random => self.random_move(board, tier)?,
            Tier::Greedy => self.greedy_move(board, lines, ai)?,
            Tier::Minimax => self.minimax_move(board, lines, ai)?,
        };
        result.time_ms = start_time.elapsed().as_millis() as u64;

        log::debug!(
            "{} search for {}: cell {} score {:?} depth {:?} nodes {} time {}ms",
            tier.name(),
            ai,
            result.best_move,
            result.score,
            result.depth_limit,
            result.nodes_searched,
            result.time_ms
        );
        Ok(result)
    }

    fn random_move(&mut self, board: &Board, tier: Tier) -> Result<SearchResult> {
        let empty: SmallVec<[usize; 64]> = board.empty_cells().collect();
        let best_move = *empty.choose(&mut self.rng).ok_or(EngineError::NoLegalMove)?;
        Ok(SearchResult {
            best_move,
            tier,
            score: None,
            depth_limit: None,
            nodes_searched: 0,
            time_ms: 0,
        })
    }

    /// Win if possible, else block, else take the center, else random.
    fn greedy_move(&mut self, board: &Board, lines: &LineSet, ai: Mark) -> Result<SearchResult> {
        let mut work = board.clone();
        let empty: SmallVec<[usize; 64]> = board.empty_cells().collect();
        let mut nodes = 0;

        let mut completing_move = |work: &mut Board, mark: Mark| -> Result<Option<usize>> {
            for &idx in &empty {
                work.apply(idx, mark)?;
                nodes += 1;
                let wins = find_win(work, lines).is_some_and(|win| win.mark == mark);
                work.revert(idx)?;
                if wins {
                    return Ok(Some(idx));
                }
            }
            Ok(None)
        };

        let winning = completing_move(&mut work, ai)?;
        let blocking = match winning {
            Some(_) => None,
            None => completing_move(&mut work, ai.opponent())?,
        };

        let center = board.center();
        let choice = winning
            .or(blocking)
            .or_else(|| board.is_empty_at(center).then_some(center));

        let best_move = match choice {
            Some(idx) => idx,
            None => *empty.choose(&mut self.rng).ok_or(EngineError::NoLegalMove)?,
        };

        Ok(SearchResult {
            best_move,
            tier: Tier::Greedy,
            score: None,
            depth_limit: Some(1),
            nodes_searched: nodes,
            time_ms: 0,
        })
    }

    fn minimax_move(&mut self, board: &Board, lines: &LineSet, ai: Mark) -> Result<SearchResult> {
        let max_depth = depth_limit(board);
        let root_moves: SmallVec<[usize; 64]> = board.empty_cells().collect();

        let scored: Vec<(usize, i64, u64)> = if self.parallel {
            root_moves
                .as_slice()
                .par_iter()
                .map(|&idx| -> Result<(usize, i64, u64)> {
                    let mut work = board.clone();
                    let mut search = Minimax::new(lines, ai, max_depth);
                    let score = search.score_root_move(&mut work, idx)?;
                    Ok((idx, score, search.nodes))
                })
                .collect::<Result<Vec<_>>>()?
        } else {
            let mut work = board.clone();
            let mut scored = Vec::with_capacity(root_moves.len());
            for &idx in &root_moves {
                let mut search = Minimax::new(lines, ai, max_depth);
                let score = search.score_root_move(&mut work, idx)?;
                scored.push((idx, score, search.nodes));
            }
            scored
        };

        // First maximum in ascending cell order wins ties
        let mut best: Option<(usize, i64)> = None;
        let mut nodes = 0;
        for &(idx, score, searched) in &scored {
            log::trace!("root move {} scored {}", idx, score);
            nodes += searched;
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((idx, score));
            }
        }
        let (best_move, score) = best.ok_or(EngineError::NoLegalMove)?;

        Ok(SearchResult {
            best_move,
            tier: Tier::Minimax,
            score: Some(score),
            depth_limit: Some(max_depth),
            nodes_searched: nodes,
            time_ms: 0,
        })
    }
}
