use super::{Board, Line, LineSet, Mark};

/// A completed run found on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win<'a> {
    pub mark: Mark,
    pub line: &'a Line,
}

/// Scan `lines` in enumeration order and return the first one whose cells
/// all hold the same mark.
///
/// Because the scan order is fixed (rows, columns, ↘, ↗, each by start
/// index), a move that completes several lines at once always reports the
/// same one.
pub fn find_win<'a>(board: &Board, lines: &'a LineSet) -> Option<Win<'a>> {
    lines.iter().find_map(|line| {
        let first = board.get(*line.cells().first()?)?.mark()?;
        let complete = line
            .cells()
            .iter()
            .all(|&idx| board.get(idx).and_then(|cell| cell.mark()) == Some(first));
        complete.then_some(Win { mark: first, line })
    })
}
