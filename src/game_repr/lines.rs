//! Candidate winning lines.
//!
//! A line is one fixed run of `win_length` cell indices along a row, a
//! column or one of the two diagonal directions. The full set for a given
//! `(size, win_length)` pair is pure data: it is generated once and can be
//! shared by every session and search that plays on that geometry.
//!
//! Lines are always produced in the same order: rows, columns, descending
//! diagonals (↘), ascending diagonals (↗), and within each group by
//! increasing start index. Win detection depends on this order to report a
//! deterministic line when one move completes several at once.

use crate::error::{EngineError, Result};
use once_cell::sync::Lazy;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Process-wide memo of generated line sets, keyed by `(size, win_length)`.
static LINE_CACHE: Lazy<Mutex<HashMap<(usize, usize), Arc<LineSet>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Direction of a line on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Row,
    Column,
    /// ↘: row and column both increase.
    DiagonalDown,
    /// ↗: row decreases while column increases.
    DiagonalUp,
}

/// One candidate run of cells, in the order they were enumerated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    kind: LineKind,
    cells: SmallVec<[usize; 8]>,
}

impl Line {
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.cells.to_vec()
    }
}

/// Every candidate line for one board geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSet {
    size: usize,
    win_length: usize,
    lines: Vec<Line>,
}

impl LineSet {
    /// Enumerate all lines for a `size`×`size` board and runs of `win_length`.
    ///
    /// A `win_length` larger than `size` is not an error: the set is simply
    /// empty and no win is ever possible. Zero for either value is.
    pub fn generate(size: usize, win_length: usize) -> Result<LineSet> {
        if size == 0 {
            return Err(EngineError::configuration(
                size,
                win_length,
                "board size must be positive",
            ));
        }
        if win_length == 0 {
            return Err(EngineError::configuration(
                size,
                win_length,
                "win length must be positive",
            ));
        }

        let n = size;
        let k = win_length;
        let mut lines = Vec::new();

        if k <= n {
            let starts = n - k + 1;
            lines.reserve(2 * n * starts + 2 * starts * starts);

            for r in 0..n {
                for c in 0..starts {
                    lines.push(Self::line(LineKind::Row, k, |i| r * n + c + i));
                }
            }
            for c in 0..n {
                for r in 0..starts {
                    lines.push(Self::line(LineKind::Column, k, |i| (r + i) * n + c));
                }
            }
            for r in 0..starts {
                for c in 0..starts {
                    lines.push(Self::line(LineKind::DiagonalDown, k, |i| (r + i) * n + c + i));
                }
            }
            for r in (k - 1)..n {
                for c in 0..starts {
                    lines.push(Self::line(LineKind::DiagonalUp, k, |i| (r - i) * n + c + i));
                }
            }
        }

        log::debug!(
            "generated {} lines for size {} win length {}",
            lines.len(),
            size,
            win_length
        );

        Ok(Self {
            size,
            win_length,
            lines,
        })
    }

    /// Shared line set for this geometry, generated on first use.
    pub fn cached(size: usize, win_length: usize) -> Result<Arc<LineSet>> {
        let mut cache = LINE_CACHE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(set) = cache.get(&(size, win_length)) {
            return Ok(Arc::clone(set));
        }

        let set = Arc::new(Self::generate(size, win_length)?);
        cache.insert((size, win_length), Arc::clone(&set));
        Ok(set)
    }

    fn line(kind: LineKind, k: usize, index_at: impl Fn(usize) -> usize) -> Line {
        Line {
            kind,
            cells: (0..k).map(index_at).collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<'a> IntoIterator for &'a LineSet {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
