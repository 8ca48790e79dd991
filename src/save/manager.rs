//! Best-time store
//!
//! This module provides the BestTimeStore struct which handles:
//! - Loading the stored best completion time
//! - Comparing a finished run against it
//! - Persisting improvements to disk
//!
//! The store is the persistence collaborator of the core: the game hands
//! it a completion time once per won session and the store decides
//! whether that beats the record.

use super::types::*;
use std::fs;
use std::path::{Path, PathBuf};

const BEST_TIME_FILENAME: &str = "best_time.json";

pub struct BestTimeStore {
    file_path: PathBuf,
}

impl BestTimeStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory will be created if it doesn't exist.
    pub fn new(save_directory: impl AsRef<Path>) -> Result<Self, BestTimeError> {
        let save_dir = save_directory.as_ref().to_path_buf();

        if !save_dir.exists() {
            fs::create_dir_all(&save_dir)?;
        }

        Ok(BestTimeStore {
            file_path: save_dir.join(BEST_TIME_FILENAME),
        })
    }

    /// Loads the stored best time, or None if no record exists yet.
    pub fn load(&self) -> Result<Option<BestTimeFile>, BestTimeError> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.file_path)?;
        let file: BestTimeFile = serde_json::from_str(&json)?;

        // Version check
        if file.version > CURRENT_BEST_TIME_VERSION {
            return Err(BestTimeError::InvalidVersion(file.version));
        }

        Ok(Some(file))
    }

    /// Submits a completion time as a record candidate.
    ///
    /// # Returns
    ///
    /// Ok(true) if the candidate beat the stored best (or was the first
    /// completion) and was persisted; Ok(false) if the stored best stands.
    pub fn submit(&self, seconds: f32) -> Result<bool, BestTimeError> {
        let current = self.load()?;
        if let Some(best) = &current {
            if seconds >= best.best_seconds {
                return Ok(false);
            }
        }

        let record = BestTimeFile {
            version: CURRENT_BEST_TIME_VERSION,
            best_seconds: seconds,
            recorded_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };

        // Pretty JSON for readability/debugging, matching the rest of the
        // save surface.
        let json = serde_json::to_string_pretty(&record)?;
        fs::write(&self.file_path, json)?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static DIR_COUNTER: AtomicU32 = AtomicU32::new(0);

    /// Each test gets its own scratch directory so they can run in
    /// parallel without clobbering each other's files.
    fn scratch_store() -> (BestTimeStore, PathBuf) {
        let unique = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "maze_escape_best_time_{}_{}",
            std::process::id(),
            unique
        ));
        let _ = fs::remove_dir_all(&dir);
        let store = BestTimeStore::new(&dir).unwrap();
        (store, dir)
    }

    #[test]
    fn test_first_submission_is_always_a_record() {
        let (store, dir) = scratch_store();

        assert!(store.load().unwrap().is_none());
        assert!(store.submit(42.5).unwrap());

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.best_seconds, 42.5);
        assert_eq!(loaded.version, CURRENT_BEST_TIME_VERSION);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_slower_time_does_not_replace_the_record() {
        let (store, dir) = scratch_store();

        assert!(store.submit(30.0).unwrap());
        assert!(!store.submit(31.0).unwrap());
        assert!(!store.submit(30.0).unwrap()); // ties don't replace either

        assert_eq!(store.load().unwrap().unwrap().best_seconds, 30.0);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_faster_time_replaces_the_record() {
        let (store, dir) = scratch_store();

        assert!(store.submit(30.0).unwrap());
        assert!(store.submit(12.34).unwrap());
        assert_eq!(store.load().unwrap().unwrap().best_seconds, 12.34);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_future_version_is_rejected() {
        let (store, dir) = scratch_store();

        let json = format!(
            "{{\"version\": {}, \"best_seconds\": 1.0, \"recorded_at\": \"now\"}}",
            CURRENT_BEST_TIME_VERSION + 1
        );
        fs::write(dir.join(BEST_TIME_FILENAME), json).unwrap();

        assert!(matches!(
            store.load(),
            Err(BestTimeError::InvalidVersion(_))
        ));

        let _ = fs::remove_dir_all(dir);
    }
}
