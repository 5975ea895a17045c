//! # Dice Bingo
//!
//! Scoring engine for a single-player dice placement game: every turn two dice
//! are rolled and their sum is written into an empty cell of a 5x5 grid. Once
//! the grid is full, each row, column and diagonal is scored like a poker hand,
//! with the two diagonals counting double.
//!
//! ## Features
//!
//! - **Game**: board state, dice, legal moves and automated play
//! - **Scoring**: hand classification per line and the 12-line breakdown
//! - **Services**: a turn driver emitting game events and a concurrent session registry
//! - **Ranking**: the top-five leaderboard and its JSON persistence
//! - **Recording**: placement history exported to CSV
//!
//! ## Usage
//!
//! ```rust
//! use dice_bingo::services::game_controller::GameController;
//!
//! let mut game = GameController::seeded(7);
//! game.roll().unwrap();
//! let sheet = game.place(2, 2).unwrap();
//! assert_eq!(sheet.total, 0);
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Board state, dice and automated play
pub mod game;

/// Line classification and score aggregation
pub mod scoring;

/// Game controller and session registry
pub mod services;

/// Top-five leaderboard
pub mod ranking;

/// Game history and CSV export
pub mod recording;

/// Logger initialisation
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use game::board::{
    create_board_empty, Board, PlacementError, RollError, BOARD_SIZE, MAX_DICE_SUM, MAX_TURNS,
    MIN_DICE_SUM,
};
pub use game::dice::DiceRoll;
pub use ranking::{PlayerName, Ranking, RankingError};
pub use scoring::hand::{classify, HandCategory};
pub use scoring::lines::LineId;
pub use scoring::scoring::{score_board, LineScore, ScoreSheet};
pub use services::game_controller::{GameController, GameEvent};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the Dice Bingo library
#[derive(Debug, thiserror::Error)]
pub enum DiceBingoError {
    #[error("Placement rejected: {0}")]
    Placement(#[from] PlacementError),

    #[error("Roll rejected: {0}")]
    Roll(#[from] RollError),

    #[error("Ranking error: {0}")]
    Ranking(#[from] RankingError),

    #[error("Unknown session: {0}")]
    SessionNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DiceBingoError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
