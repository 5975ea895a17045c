//! Top-five leaderboard and its persistence.

#[allow(clippy::module_inception)]
pub mod ranking;
pub mod ranking_store;

pub use ranking::{PlayerName, Ranking, RankingEntry, RankingError, RANKING_CAPACITY};
pub use ranking_store::{JsonFileRankingStore, MemoryRankingStore, RankingStore};

/// Offer a finished game's score to a stored ranking.
///
/// Returns the 0-based rank when the score made it in, `None` when it did
/// not qualify. The store is only written when the ranking changed.
pub fn submit_score<S: RankingStore + ?Sized>(
    store: &S,
    name: PlayerName,
    score: u32,
) -> crate::Result<Option<usize>> {
    let mut ranking = store.load()?;
    if !ranking.qualifies(score) {
        log::debug!("score {} does not qualify for the ranking", score);
        return Ok(None);
    }
    let rank = ranking.insert(name, score)?;
    store.save(&ranking)?;
    Ok(Some(rank))
}
