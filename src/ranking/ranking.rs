use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Entries kept on the leaderboard.
pub const RANKING_CAPACITY: usize = 5;

/// Letters in a player's name.
pub const NAME_LENGTH: usize = 2;

const EMPTY_NAME: &str = "---";
const EMPTY_SCORE: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    #[error("name {0:?} must be exactly two letters A-Z")]
    InvalidName(String),

    #[error("score {0} does not beat the current top {capacity}", capacity = RANKING_CAPACITY)]
    NotQualifying(u32),
}

/// Two uppercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Uppercase the input, drop anything that is not A-Z, keep the first
    /// two letters. Fails unless two letters remain.
    pub fn parse(raw: &str) -> Result<Self, RankingError> {
        let name: String = raw
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .filter(char::is_ascii_uppercase)
            .take(NAME_LENGTH)
            .collect();
        if name.len() == NAME_LENGTH {
            Ok(PlayerName(name))
        } else {
            Err(RankingError::InvalidName(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerName {
    type Error = RankingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PlayerName::parse(&value)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub name: PlayerName,
    pub score: u32,
}

/// Top scores, highest first. Equal scores keep their insertion order.
///
/// Serialized as a bare JSON array; deserializing goes through
/// [`Ranking::from_entries`], so a loaded ranking is always sorted and capped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<RankingEntry>", into = "Vec<RankingEntry>")]
pub struct Ranking {
    entries: Vec<RankingEntry>,
}

impl From<Vec<RankingEntry>> for Ranking {
    fn from(entries: Vec<RankingEntry>) -> Self {
        Ranking::from_entries(entries)
    }
}

impl From<Ranking> for Vec<RankingEntry> {
    fn from(ranking: Ranking) -> Self {
        ranking.entries
    }
}

impl Ranking {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from stored entries, restoring the ordering and size limit.
    pub fn from_entries(mut entries: Vec<RankingEntry>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(RANKING_CAPACITY);
        Ranking { entries }
    }

    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lowest_score(&self) -> Option<u32> {
        self.entries.last().map(|e| e.score)
    }

    /// A free slot, or strictly better than the last place.
    pub fn qualifies(&self, score: u32) -> bool {
        self.entries.len() < RANKING_CAPACITY
            || self.lowest_score().is_some_and(|lowest| score > lowest)
    }

    /// Insert a qualifying score and return its 0-based rank.
    pub fn insert(&mut self, name: PlayerName, score: u32) -> Result<usize, RankingError> {
        if !self.qualifies(score) {
            return Err(RankingError::NotQualifying(score));
        }
        // After every entry scoring at least as much: a stable insert.
        let rank = self.entries.partition_point(|e| e.score >= score);
        log::info!("{} enters the ranking at #{} with {}", name, rank + 1, score);
        self.entries.insert(rank, RankingEntry { name, score });
        self.entries.truncate(RANKING_CAPACITY);
        Ok(rank)
    }

    /// Exactly `RANKING_CAPACITY` rows of (name, score) text, padded with
    /// placeholders.
    pub fn display_rows(&self) -> Vec<(String, String)> {
        let mut rows: Vec<(String, String)> = self
            .entries
            .iter()
            .map(|e| (e.name.to_string(), e.score.to_string()))
            .collect();
        rows.resize(
            RANKING_CAPACITY,
            (EMPTY_NAME.to_string(), EMPTY_SCORE.to_string()),
        );
        rows
    }
}
