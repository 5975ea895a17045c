use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRecord {
    /// 1-based turn on which the value was placed
    pub turn: usize,
    pub row: usize,
    pub col: usize,
    pub value: u8,
    /// Board total right after this placement
    pub total_after: u32,
}

/// Complete record of a game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: String,
    /// Unix timestamp of the first placement
    pub timestamp: i64,
    /// Who or what chose the cells, e.g. "greedy" or a player name
    pub strategy: String,
    pub placements: Vec<PlacementRecord>,
    pub final_score: Option<u32>,
}

impl GameRecord {
    pub fn new(strategy: &str) -> Self {
        Self {
            game_id: Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().timestamp(),
            strategy: strategy.to_string(),
            placements: Vec::new(),
            final_score: None,
        }
    }

    pub fn record_placement(&mut self, placement: PlacementRecord) {
        self.placements.push(placement);
    }

    pub fn finalize(&mut self, final_score: u32) {
        self.final_score = Some(final_score);
    }

    pub fn is_finished(&self) -> bool {
        self.final_score.is_some()
    }
}
