use super::{Cell, Mark, Move};
use crate::error::{EngineError, IllegalMove};
use std::fmt;

/*
 * MODULE IS RESPONSIBLE FOR
 * CELL STATE AND MOVE LEGALITY
 */

/// Square board of `size`×`size` cells in row-major order.
///
/// `apply` and `revert` are the only ways cell state changes. Both are
/// O(1), which is what lets the search reuse one board for a whole tree
/// instead of copying it per node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    occupied: usize,
}

impl Board {
    pub fn new(size: usize) -> Board {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
            occupied: 0,
        }
    }

    /// Rebuild a board by playing `history` in order on an empty board.
    pub fn replay(size: usize, history: &[Move]) -> Result<Board, EngineError> {
        let mut board = Board::new(size);
        for mv in history {
            board.apply(mv.index, mv.mark)?;
        }
        Ok(board)
    }

    /// Place `mark` on an empty cell. Rejected moves leave the board untouched.
    pub fn apply(&mut self, index: usize, mark: Mark) -> Result<(), IllegalMove> {
        match self.cells.get(index) {
            None => Err(IllegalMove::OutOfRange {
                index,
                cells: self.cells.len(),
            }),
            Some(cell) if !cell.is_empty() => Err(IllegalMove::Occupied { index }),
            Some(_) => {
                self.cells[index] = Cell::from(mark);
                self.occupied += 1;
                Ok(())
            }
        }
    }

    /// Clear a previously occupied cell.
    pub fn revert(&mut self, index: usize) -> Result<(), IllegalMove> {
        match self.cells.get(index) {
            None => Err(IllegalMove::OutOfRange {
                index,
                cells: self.cells.len(),
            }),
            Some(cell) if cell.is_empty() => Err(IllegalMove::NotOccupied { index }),
            Some(_) => {
                self.cells[index] = Cell::Empty;
                self.occupied -= 1;
                Ok(())
            }
        }
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    pub fn is_full(&self) -> bool {
        self.occupied == self.cells.len()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.occupied
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| idx)
    }

    /// Geometric center `⌊n/2⌋·n + ⌊n/2⌋`.
    pub fn center(&self) -> usize {
        let half = self.size / 2;
        half * self.size + half
    }
}

impl fmt::Display for Board {
    /// Rows of `X`, `O` and `.` separated by spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.cells.chunks(self.size.max(1)).enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<String> = row
                .iter()
                .map(|cell| match cell.mark() {
                    Some(mark) => mark.to_string(),
                    None => ".".to_string(),
                })
                .collect();
            write!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}
