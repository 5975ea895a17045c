use crate::game::board::{Board, BOARD_SIZE};

/// Returns the `(row, col)` of every empty cell, in row-major order
pub fn get_legal_moves(board: &Board) -> Vec<(usize, usize)> {
    (0..BOARD_SIZE)
        .flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
        .filter(|&(row, col)| board.cell(row, col).is_none())
        .collect()
}
