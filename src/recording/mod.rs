//! Game history recording.
//!
//! - `game_record`: what happened in one game, placement by placement
//! - `csv_writer`: daily CSV files of finished games

pub mod csv_writer;
pub mod game_record;

pub use csv_writer::{load_records, CsvRow, CsvWriter};
pub use game_record::{GameRecord, PlacementRecord};
