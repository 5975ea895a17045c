//! Turn driver for a single game.
//!
//! The controller rolls, places and rescores, and tells subscribers what
//! happened through [`GameEvent`]s. It never renders anything itself.

use crate::game::board::{create_board_empty, Board, PlacementError, RollError};
use crate::game::dice::DiceRoll;
use crate::scoring::scoring::{score_board, ScoreSheet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    Rolled {
        roll: DiceRoll,
    },
    /// Sent after every successful placement with the recomputed breakdown.
    Placed {
        row: usize,
        col: usize,
        value: u8,
        sheet: ScoreSheet,
    },
    /// Sent once, right after the placement that fills the last cell.
    GameOver {
        total: u32,
    },
}

pub type GameObserver = Box<dyn FnMut(&GameEvent) + Send>;

pub struct GameController<R: Rng = StdRng> {
    board: Board,
    sheet: ScoreSheet,
    last_roll: Option<DiceRoll>,
    rng: R,
    observers: Vec<GameObserver>,
}

impl GameController<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for GameController<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameController<R> {
    pub fn with_rng(rng: R) -> Self {
        let board = create_board_empty();
        let sheet = score_board(&board);
        Self {
            board,
            sheet,
            last_roll: None,
            rng,
            observers: Vec::new(),
        }
    }

    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&GameEvent) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Breakdown as of the last placement.
    pub fn score_sheet(&self) -> &ScoreSheet {
        &self.sheet
    }

    pub fn total_score(&self) -> u32 {
        self.sheet.total
    }

    pub fn last_roll(&self) -> Option<DiceRoll> {
        self.last_roll
    }

    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    pub fn final_score(&self) -> Option<u32> {
        self.is_game_over().then_some(self.sheet.total)
    }

    /// Roll both dice and hold the sum for the next placement.
    pub fn roll(&mut self) -> Result<DiceRoll, RollError> {
        // Refuse before drawing so a rejected roll leaves the rng untouched.
        self.check_can_roll()?;
        let roll = DiceRoll::random(&mut self.rng);
        self.accept_roll(roll)
    }

    /// Use a roll produced elsewhere, e.g. by a client-side animation.
    /// Faces outside 1..=6 are refused before the board sees anything.
    pub fn accept_roll(&mut self, roll: DiceRoll) -> Result<DiceRoll, RollError> {
        let sum = roll.checked_sum()?;
        self.board.roll(sum)?;
        self.last_roll = Some(roll);
        log::debug!("rolled {}+{}={}", roll.first, roll.second, sum);
        self.emit(GameEvent::Rolled { roll });
        Ok(roll)
    }

    pub fn place(&mut self, row: usize, col: usize) -> Result<&ScoreSheet, PlacementError> {
        let value = self.board.place(row, col)?;
        self.sheet = score_board(&self.board);

        self.emit(GameEvent::Placed {
            row,
            col,
            value,
            sheet: self.sheet.clone(),
        });

        if self.board.is_game_over() {
            log::info!("game over, final score {}", self.sheet.total);
            self.emit(GameEvent::GameOver {
                total: self.sheet.total,
            });
        }
        Ok(&self.sheet)
    }

    /// Start over on an empty board. Subscribers stay attached.
    pub fn restart(&mut self) {
        self.board = create_board_empty();
        self.sheet = score_board(&self.board);
        self.last_roll = None;
        log::debug!("game restarted");
    }

    fn check_can_roll(&self) -> Result<(), RollError> {
        if self.board.is_game_over() {
            return Err(RollError::GameOver);
        }
        match self.board.pending_value() {
            Some(pending) => Err(RollError::PlacementPending(pending)),
            None => Ok(()),
        }
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in self.observers.iter_mut() {
            observer(&event);
        }
    }
}
