use crate::ranking::ranking::Ranking;
use crate::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Name the browser build kept its list under; used as the default file stem.
pub const RANKING_STORAGE_KEY: &str = "diceBingoRanking";

pub trait RankingStore {
    fn load(&self) -> Result<Ranking>;
    fn save(&self, ranking: &Ranking) -> Result<()>;
}

/// JSON array of `{"name", "score"}` objects in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileRankingStore {
    path: PathBuf,
}

impl JsonFileRankingStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// `<dir>/diceBingoRanking.json`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(dir.as_ref().join(format!("{}.json", RANKING_STORAGE_KEY)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RankingStore for JsonFileRankingStore {
    /// A missing file is an empty ranking.
    fn load(&self) -> Result<Ranking> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no ranking at {}, starting empty", self.path.display());
                return Ok(Ranking::new());
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, ranking: &Ranking) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(ranking)?)?;
        log::debug!("saved {} ranking entries to {}", ranking.len(), self.path.display());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryRankingStore {
    ranking: Mutex<Ranking>,
}

impl MemoryRankingStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Ranking>> {
        self.ranking.lock().map_err(|e| {
            std::io::Error::other(format!("ranking lock poisoned: {}", e)).into()
        })
    }
}

impl RankingStore for MemoryRankingStore {
    fn load(&self) -> Result<Ranking> {
        Ok(self.lock()?.clone())
    }

    fn save(&self, ranking: &Ranking) -> Result<()> {
        *self.lock()? = ranking.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::ranking::PlayerName;
    use crate::DiceBingoError;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_loads_empty() -> Result<()> {
        let dir = tempdir()?;
        let store = JsonFileRankingStore::in_dir(dir.path());
        assert!(store.load()?.is_empty());
        assert!(store.path().ends_with("diceBingoRanking.json"));
        Ok(())
    }

    #[test]
    fn test_save_then_load() -> Result<()> {
        let dir = tempdir()?;
        let store = JsonFileRankingStore::new(dir.path().join("nested/ranking.json"));

        let mut ranking = Ranking::new();
        ranking.insert(PlayerName::parse("AB")?, 42)?;
        ranking.insert(PlayerName::parse("CD")?, 17)?;
        store.save(&ranking)?;

        assert_eq!(store.load()?, ranking);
        Ok(())
    }

    #[test]
    fn test_load_restores_order() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("ranking.json");
        fs::write(
            &path,
            r#"[{"name":"LO","score":3},{"name":"HI","score":90},{"name":"MI","score":40}]"#,
        )?;

        let ranking = JsonFileRankingStore::new(&path).load()?;
        let names: Vec<&str> = ranking.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["HI", "MI", "LO"]);
        Ok(())
    }

    #[test]
    fn test_corrupt_file_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("ranking.json");
        fs::write(&path, "not json")?;

        assert_matches!(JsonFileRankingStore::new(&path).load(), Err(DiceBingoError::Json(_)));
        Ok(())
    }

    #[test]
    fn test_memory_store() -> Result<()> {
        let store = MemoryRankingStore::new();
        let mut ranking = store.load()?;
        ranking.insert(PlayerName::parse("MM")?, 5)?;
        store.save(&ranking)?;
        assert_eq!(store.load()?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_poisoned_memory_store_reports_error() {
        let store = std::sync::Arc::new(MemoryRankingStore::new());
        let holder = std::sync::Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = holder.ranking.lock().unwrap();
            panic!("writer died while holding the ranking");
        })
        .join();

        assert_matches!(store.load(), Err(DiceBingoError::Io(_)));
        assert_matches!(store.save(&Ranking::new()), Err(DiceBingoError::Io(_)));
        assert_matches!(
            crate::ranking::submit_score(&*store, PlayerName::parse("PZ").unwrap(), 9),
            Err(DiceBingoError::Io(_))
        );
    }
}
