use crate::game::board_is_full::is_board_full;
use serde::Serialize;
use thiserror::Error;

/// Side length of the square grid.
pub const BOARD_SIZE: usize = 5;

/// One placement per cell, so a game lasts exactly this many turns.
pub const MAX_TURNS: usize = BOARD_SIZE * BOARD_SIZE;

/// Smallest sum of two six-sided dice.
pub const MIN_DICE_SUM: u8 = 2;

/// Largest sum of two six-sided dice.
pub const MAX_DICE_SUM: u8 = 12;

/// A cell is empty until a dice sum is written into it.
pub type Cell = Option<u8>;

/// Reasons a placement is refused. A refused placement never touches the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("cell ({row}, {col}) is outside the {size}x{size} grid", size = BOARD_SIZE)]
    InvalidCoordinate { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already filled")]
    CellOccupied { row: usize, col: usize },

    #[error("no rolled value is waiting to be placed")]
    NoPendingValue,
}

/// Reasons a roll result cannot be accepted by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollError {
    #[error("value {0} is still waiting to be placed")]
    PlacementPending(u8),

    #[error("the board is full, the game is over")]
    GameOver,

    #[error("{0} is not a sum of two dice")]
    OutOfRange(u8),

    #[error("{first}+{second} is not a roll of two six-sided dice")]
    InvalidFaces { first: u8, second: u8 },
}

/// The 5x5 grid, the turn counter and the value waiting to be placed.
///
/// Cells are write-once: `place` refuses occupied cells, and nothing else
/// mutates them. `filled_count() == turn() - 1` holds after every operation.
/// Serialize only: a board is rebuilt by replaying rolls, never loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    turn: usize,
    pending: Option<u8>,
}

impl Default for Board {
    fn default() -> Self {
        create_board_empty()
    }
}

pub fn create_board_empty() -> Board {
    Board {
        cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        turn: 1,
        pending: None,
    }
}

impl Board {
    /// Cell content, or `None` for empty and out-of-range coordinates alike.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// 1-based turn number; `MAX_TURNS + 1` once the board is full.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn pending_value(&self) -> Option<u8> {
        self.pending
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn is_game_over(&self) -> bool {
        is_board_full(self)
    }

    /// Accept a finished roll. The board must be waiting for a roll.
    pub fn roll(&mut self, value: u8) -> Result<(), RollError> {
        if self.is_game_over() {
            return Err(RollError::GameOver);
        }
        if let Some(pending) = self.pending {
            return Err(RollError::PlacementPending(pending));
        }
        if !(MIN_DICE_SUM..=MAX_DICE_SUM).contains(&value) {
            return Err(RollError::OutOfRange(value));
        }
        self.pending = Some(value);
        Ok(())
    }

    /// Write the pending value into `(row, col)` and advance the turn.
    ///
    /// Returns the value written. Checks run before any mutation, so an
    /// error leaves the board exactly as it was.
    pub fn place(&mut self, row: usize, col: usize) -> Result<u8, PlacementError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(PlacementError::InvalidCoordinate { row, col });
        }
        if self.cells[row][col].is_some() {
            return Err(PlacementError::CellOccupied { row, col });
        }
        let value = self.pending.ok_or(PlacementError::NoPendingValue)?;

        self.cells[row][col] = Some(value);
        self.pending = None;
        self.turn += 1;
        log::debug!("placed {} at ({}, {}), turn is now {}", value, row, col, self.turn);
        Ok(value)
    }
}
