//! Reading progress persistence.
//!
//! A single JSON record at a well-known path:
//!
//! ```json
//! { "chapterIndex": 2, "lineIndex": 5, "timestamp": "2026-01-01T12:00:00Z" }
//! ```
//!
//! Persistence is best-effort. A missing, unreadable or malformed file all
//! load as "no saved progress", and failed writes are logged and dropped.

mod writer;

pub use writer::ProgressWriter;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PROGRESS_FILE_NAME: &str = "progress.json";

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("progress persistence is disabled")]
    NoLocation,
    #[error("progress I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed progress record {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The saved reading position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub chapter_index: usize,
    pub line_index: usize,
    pub timestamp: DateTime<Utc>,
}

impl Progress {
    /// A record for the given position stamped with the current time.
    pub fn now(chapter_index: usize, line_index: usize) -> Self {
        Self {
            chapter_index,
            line_index,
            timestamp: Utc::now(),
        }
    }

    /// Same position, ignoring the timestamp.
    pub const fn same_position(&self, chapter_index: usize, line_index: usize) -> bool {
        self.chapter_index == chapter_index && self.line_index == line_index
    }
}

/// Default location of the progress record.
///
/// Lives next to the flag defaults file in the platform config directory.
pub fn default_progress_path() -> Option<PathBuf> {
    crate::config::config_dir().map(|dir| dir.join(PROGRESS_FILE_NAME))
}

/// Reads, writes and clears the single progress record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressStore {
    path: Option<PathBuf>,
}

impl ProgressStore {
    /// Store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Store that never reads or writes anything.
    pub const fn disabled() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub const fn is_enabled(&self) -> bool {
        self.path.is_some()
    }

    /// Load the saved record, treating every failure as absent.
    pub fn load(&self) -> Option<Progress> {
        match self.try_load() {
            Ok(progress) => progress,
            Err(err) => {
                tracing::debug!("ignoring saved progress: {err}");
                crate::perf::log_event("progress.load.error", err.to_string());
                None
            }
        }
    }

    /// Load the saved record.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn try_load(&self) -> Result<Option<Progress>, ProgressError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(|source| ProgressError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let progress = serde_json::from_str(&content).map_err(|source| ProgressError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(progress))
    }

    /// Save a position, logging and dropping any failure.
    pub fn save(&self, chapter_index: usize, line_index: usize) {
        if let Err(err) = self.try_save(&Progress::now(chapter_index, line_index)) {
            tracing::debug!("progress not saved: {err}");
            crate::perf::log_event("progress.save.error", err.to_string());
        }
    }

    /// Write a record atomically (temp file, then rename).
    ///
    /// # Errors
    ///
    /// Returns an error if persistence is disabled or the file cannot be written.
    pub fn try_save(&self, progress: &Progress) -> Result<(), ProgressError> {
        let path = self.path.as_deref().ok_or(ProgressError::NoLocation)?;
        let io_err = |source| ProgressError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let payload = serde_json::to_string_pretty(progress).map_err(|source| {
            ProgressError::Json {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let tmp = path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp).map_err(io_err)?;
        file.write_all(payload.as_bytes()).map_err(io_err)?;
        file.flush().map_err(io_err)?;
        fs::rename(&tmp, path).map_err(io_err)?;
        Ok(())
    }

    /// Delete the saved record, ignoring failures.
    pub fn clear(&self) {
        let Some(path) = self.path.as_deref() else {
            return;
        };
        if path.exists()
            && let Err(err) = fs::remove_file(path)
        {
            tracing::debug!("progress not cleared: {err}");
            crate::perf::log_event("progress.clear.error", err.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_then_load_round_trips_position() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path().join("progress.json"));

        store.save(2, 5);
        let loaded = store.load().unwrap();
        assert!(loaded.same_position(2, 5));
    }

    #[test]
    fn test_save_creates_missing_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("progress.json");
        let store = ProgressStore::new(&path);

        store.save(1, 1);
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_missing_file_loads_as_absent() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path().join("progress.json"));
        assert!(store.load().is_none());
        assert!(store.try_load().unwrap().is_none());
    }

    #[test]
    fn test_malformed_file_loads_as_absent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = ProgressStore::new(&path);

        assert!(store.load().is_none());
        assert!(matches!(store.try_load(), Err(ProgressError::Json { .. })));
    }

    #[test]
    fn test_negative_index_is_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.json");
        std::fs::write(
            &path,
            r#"{"chapterIndex": -1, "lineIndex": 0, "timestamp": "2026-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(ProgressStore::new(&path).load().is_none());
    }

    #[test]
    fn test_record_uses_camel_case_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.json");
        let store = ProgressStore::new(&path);
        store.save(3, 7);

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["chapterIndex"], 3);
        assert_eq!(value["lineIndex"], 7);
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_reads_record_written_by_other_tools() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.json");
        std::fs::write(
            &path,
            r#"{"chapterIndex": 1, "lineIndex": 12, "timestamp": "2025-06-01T08:30:15.123Z"}"#,
        )
        .unwrap();
        let loaded = ProgressStore::new(&path).load().unwrap();
        assert!(loaded.same_position(1, 12));
    }

    #[test]
    fn test_clear_removes_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.json");
        let store = ProgressStore::new(&path);
        store.save(0, 0);
        assert!(path.exists());

        store.clear();
        assert!(!path.exists());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_clear_without_record_is_noop() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::new(dir.path().join("progress.json"));
        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_disabled_store_never_persists() {
        let store = ProgressStore::disabled();
        store.save(1, 2);
        assert!(store.load().is_none());
        assert!(matches!(
            store.try_save(&Progress::now(1, 2)),
            Err(ProgressError::NoLocation)
        ));
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let dir = tempdir().unwrap();
        // A directory where the file should be makes the rename fail.
        let path = dir.path().join("progress.json");
        std::fs::create_dir(&path).unwrap();
        let store = ProgressStore::new(&path);
        store.save(1, 1);
        assert!(store.load().is_none());
    }
}
