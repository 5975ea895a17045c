use crate::game::board::{Board, BOARD_SIZE};
use crate::scoring::hand::{Line, LINE_LENGTH};
use serde::{Deserialize, Serialize};

/// Diagonals count this many times toward the total.
pub const DIAGONAL_MULTIPLIER: u32 = 2;

/// Number of scoring lines: every row, every column and both diagonals.
pub const LINE_COUNT: usize = 2 * BOARD_SIZE + 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineId {
    Row(usize),
    Column(usize),
    /// Top-left to bottom-right, `row == col`.
    MainDiagonal,
    /// Top-right to bottom-left, `row + col == BOARD_SIZE - 1`.
    AntiDiagonal,
}

impl LineId {
    /// Rows, then columns, then the two diagonals.
    pub fn all() -> impl Iterator<Item = LineId> {
        (0..BOARD_SIZE)
            .map(LineId::Row)
            .chain((0..BOARD_SIZE).map(LineId::Column))
            .chain([LineId::MainDiagonal, LineId::AntiDiagonal])
    }

    /// Coordinate of the `i`-th cell of this line.
    fn coordinate(&self, i: usize) -> (usize, usize) {
        match *self {
            LineId::Row(row) => (row, i),
            LineId::Column(col) => (i, col),
            LineId::MainDiagonal => (i, i),
            LineId::AntiDiagonal => (i, BOARD_SIZE - 1 - i),
        }
    }

    pub fn coordinates(&self) -> [(usize, usize); LINE_LENGTH] {
        std::array::from_fn(|i| self.coordinate(i))
    }

    pub fn is_diagonal(&self) -> bool {
        matches!(self, LineId::MainDiagonal | LineId::AntiDiagonal)
    }

    pub fn multiplier(&self) -> u32 {
        if self.is_diagonal() {
            DIAGONAL_MULTIPLIER
        } else {
            1
        }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.coordinates().contains(&(row, col))
    }

    pub fn label(&self) -> String {
        match self {
            LineId::Row(row) => format!("Row {}", row + 1),
            LineId::Column(col) => format!("Column {}", col + 1),
            LineId::MainDiagonal => "Diagonal (top-left to bottom-right)".to_string(),
            LineId::AntiDiagonal => "Diagonal (top-right to bottom-left)".to_string(),
        }
    }
}

pub fn extract_line(board: &Board, line: LineId) -> Line {
    line.coordinates().map(|(row, col)| board.cell(row, col))
}
