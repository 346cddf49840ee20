use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

/// Best score across sessions, persisted as a small JSON file.
///
/// The file is best-effort on both ends: a missing or malformed file reads
/// as zero, and write failures are logged and swallowed so a read-only data
/// directory never interrupts play.
#[derive(Debug)]
pub struct HighScoreStore {
    path: PathBuf,
    best: u32,
}

impl HighScoreStore {
    pub fn load(path: PathBuf) -> Self {
        let best = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str::<HighScoreFile>(&raw).ok())
            .map(|file| file.high_score)
            .unwrap_or(0);
        HighScoreStore { path, best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Records a finished run. Persists only when the best improved.
    pub fn record(&mut self, score: u32) {
        if score <= self.best {
            return;
        }
        self.best = score;
        let file = HighScoreFile { high_score: self.best };
        let write = self
            .path
            .parent()
            .map(fs::create_dir_all)
            .unwrap_or(Ok(()))
            .and_then(|_| serde_json::to_string(&file).map_err(Into::into))
            .and_then(|raw| fs::write(&self.path, raw));
        if let Err(e) = write {
            log::warn!("Failed to persist high score to {:?}: {e}", self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("flappy-rs-test-{name}-{}", std::process::id()));
        path
    }

    #[test]
    fn test_missing_file_reads_as_zero() {
        let store = HighScoreStore::load(temp_path("missing/highscore.json"));
        assert_eq!(store.best(), 0);
    }

    #[test]
    fn test_malformed_file_reads_as_zero() {
        let path = temp_path("malformed.json");
        fs::write(&path, "not json at all").unwrap();
        let store = HighScoreStore::load(path.clone());
        assert_eq!(store.best(), 0);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_record_round_trips_through_the_file() {
        let path = temp_path("roundtrip.json");
        let mut store = HighScoreStore::load(path.clone());
        store.record(12);
        assert_eq!(store.best(), 12);

        let reloaded = HighScoreStore::load(path.clone());
        assert_eq!(reloaded.best(), 12);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_lower_scores_do_not_regress_the_best() {
        let path = temp_path("regress.json");
        let mut store = HighScoreStore::load(path.clone());
        store.record(30);
        store.record(7);
        assert_eq!(store.best(), 30);

        let reloaded = HighScoreStore::load(path.clone());
        assert_eq!(reloaded.best(), 30);
        fs::remove_file(path).ok();
    }
}
