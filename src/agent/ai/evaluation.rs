// Static position evaluation
// Returns a score from the perspective of the given mark (positive = good for it)

use crate::game_repr::{Board, Line, LineSet, Mark};

/// Weight base: a line holding `c` marks of one side is worth `LINE_BASE^c`.
pub const LINE_BASE: i64 = 10;

/// Score a non-terminal position for `perspective`.
///
/// Every line still open to exactly one side contributes `10^c` for that
/// side's `c` marks, added for `perspective` and subtracted for the
/// opponent. A line holding both marks is dead and contributes nothing;
/// an untouched line contributes nothing either.
pub fn evaluate(board: &Board, lines: &LineSet, perspective: Mark) -> i64 {
    lines
        .iter()
        .map(|line| line_score(board, line, perspective))
        .fold(0i64, |acc, score| acc.saturating_add(score))
}

/// Contribution of a single line.
fn line_score(board: &Board, line: &Line, perspective: Mark) -> i64 {
    let (own, theirs) = count_marks(board, line, perspective);

    if own > 0 && theirs > 0 {
        return 0;
    }

    let mut score = 0;
    if own > 0 {
        score += weight(own);
    }
    if theirs > 0 {
        score -= weight(theirs);
    }
    score
}

/// (cells held by `perspective`, cells held by the opponent) in `line`.
fn count_marks(board: &Board, line: &Line, perspective: Mark) -> (usize, usize) {
    line.cells()
        .iter()
        .filter_map(|&idx| board.get(idx).and_then(|cell| cell.mark()))
        .fold((0, 0), |(own, theirs), mark| {
            if mark == perspective {
                (own + 1, theirs)
            } else {
                (own, theirs + 1)
            }
        })
}

fn weight(count: usize) -> i64 {
    LINE_BASE.saturating_pow(count as u32)
}
