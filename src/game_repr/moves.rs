use super::Mark;
use std::fmt;

/// A recorded placement: which mark went into which cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub index: usize,
    pub mark: Mark,
}

impl Move {
    pub fn new(index: usize, mark: Mark) -> Move {
        Self { index, mark }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.mark, self.index)
    }
}
