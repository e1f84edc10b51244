use crate::agent::ai::*;
use crate::game_repr::{Board, LineSet, Mark};

// ==================== HELPER FUNCTIONS ====================

/// Helper function to build a board from X and O cell lists
pub fn board_from(size: usize, xs: &[usize], os: &[usize]) -> Board {
    let mut board = Board::new(size);
    for &idx in xs {
        board.apply(idx, Mark::X).expect("X placement should be legal");
    }
    for &idx in os {
        board.apply(idx, Mark::O).expect("O placement should be legal");
    }
    board
}

/// Helper function to generate a line set that must be valid
pub fn lines_for(size: usize, win_length: usize) -> LineSet {
    LineSet::generate(size, win_length).expect("valid configuration")
}

// ==================== TEST MODULES ====================
