use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to build a board with the given marks placed
pub fn board_with(size: usize, placements: &[(usize, Mark)]) -> Board {
    let mut board = Board::new(size);
    for &(idx, mark) in placements {
        board.apply(idx, mark).expect("placement should be legal");
    }
    board
}

/// Helper function to parse a board from rows like "X O ." (whitespace ignored)
pub fn board_from_rows(rows: &[&str]) -> Board {
    let size = rows.len();
    let mut board = Board::new(size);
    let symbols: Vec<char> = rows
        .iter()
        .flat_map(|row| row.chars().filter(|c| !c.is_whitespace()))
        .collect();
    assert_eq!(symbols.len(), size * size, "rows must describe a square board");
    for (idx, symbol) in symbols.into_iter().enumerate() {
        match symbol {
            'X' => board.apply(idx, Mark::X).unwrap(),
            'O' => board.apply(idx, Mark::O).unwrap(),
            _ => {}
        }
    }
    board
}

/// Helper function to collect line cells as plain vectors
pub fn line_cells(lines: &LineSet) -> Vec<Vec<usize>> {
    lines.iter().map(|line| line.to_vec()).collect()
}

// ==================== TEST MODULES ====================
