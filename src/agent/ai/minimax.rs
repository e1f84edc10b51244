// Minimax Search with Alpha-Beta Pruning
//
// The maximizing side is always the computer's mark; the opponent minimizes.
// Scores are therefore always from the computer's point of view, which keeps
// the non-zero-sum line heuristic usable at the leaves (a negamax formulation
// would need a symmetric evaluation).
//
// The same board is used for the whole tree: each trial move is applied,
// searched and reverted before the next sibling is tried.

use super::evaluation::evaluate;
use crate::error::Result;
use crate::game_repr::{find_win, Board, LineSet, Mark};
use smallvec::SmallVec;

/// Base score of a completed line; adjusted by ply so faster wins and
/// slower losses are preferred.
pub const WIN_SCORE: i64 = 1000;

/// Ply at which the search stops and falls back to static evaluation.
///
/// 3×3 boards are searched to the end; larger boards are cut off early
/// because the branching factor grows with the number of cells.
pub fn depth_limit(board: &Board) -> usize {
    match board.size() {
        3 => board.empty_count(),
        4 => 5,
        _ => 4,
    }
}

/// Alpha-beta searcher bound to one line set, one maximizing mark and one
/// depth limit.
pub(crate) struct Minimax<'a> {
    lines: &'a LineSet,
    ai: Mark,
    max_depth: usize,
    pub(crate) nodes: u64,
}

impl<'a> Minimax<'a> {
    pub(crate) fn new(lines: &'a LineSet, ai: Mark, max_depth: usize) -> Self {
        Self {
            lines,
            ai,
            max_depth,
            nodes: 0,
        }
    }

    /// Score of playing `index` for the maximizing side from `board`.
    ///
    /// Each root move is searched with a fresh window, so the score is exact
    /// and independent of the order root moves are visited in.
    pub(crate) fn score_root_move(&mut self, board: &mut Board, index: usize) -> Result<i64> {
        board.apply(index, self.ai)?;
        let score = self.minimax(board, 1, false, i64::MIN, i64::MAX);
        board.revert(index)?;
        score
    }

    /// Core recursion. `depth` is the ply of `board` below the root.
    pub(crate) fn minimax(
        &mut self,
        board: &mut Board,
        depth: usize,
        maximizing: bool,
        mut alpha: i64,
        mut beta: i64,
    ) -> Result<i64> {
        self.nodes += 1;

        if let Some(win) = find_win(board, self.lines) {
            let ply = depth as i64;
            return Ok(if win.mark == self.ai {
                WIN_SCORE - ply
            } else {
                -WIN_SCORE + ply
            });
        }

        let moves: SmallVec<[usize; 64]> = board.empty_cells().collect();
        if moves.is_empty() || depth >= self.max_depth {
            return Ok(evaluate(board, self.lines, self.ai));
        }

        if maximizing {
            let mut best = i64::MIN;
            for idx in moves {
                board.apply(idx, self.ai)?;
                let score = self.minimax(board, depth + 1, false, alpha, beta);
                board.revert(idx)?;
                best = best.max(score?);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            Ok(best)
        } else {
            let opponent = self.ai.opponent();
            let mut best = i64::MAX;
            for idx in moves {
                board.apply(idx, opponent)?;
                let score = self.minimax(board, depth + 1, true, alpha, beta);
                board.revert(idx)?;
                best = best.min(score?);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            Ok(best)
        }
    }
}
