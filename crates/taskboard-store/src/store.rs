/*
[INPUT]:  Board file path, Registry state
[OUTPUT]: Durable board file with atomic writes
[POS]:    Persistence layer - load/save of the board document
[UPDATE]: When the storage location or durability strategy changes
*/

use std::io::Write;
use std::path::{Path, PathBuf};

use taskboard_core::{Registry, Task};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::document::BoardDocument;
use crate::error::StoreError;

/// Flat-file store for the board.
#[derive(Debug, Clone)]
pub struct BoardStore {
    path: PathBuf,
}

impl BoardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default board location under the platform data directory.
    pub fn default_path() -> Result<PathBuf, StoreError> {
        let dir = dirs::data_dir().ok_or_else(|| {
            StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no platform data directory",
            ))
        })?;
        Ok(dir.join("taskboard").join("board.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the whole board. The document goes to a temp file in the
    /// target directory first and is renamed over the old file, so a
    /// failure mid-write leaves the previous state intact.
    pub fn save(&self, registry: &Registry) -> Result<(), StoreError> {
        let document = BoardDocument::from_registry(registry);
        let json = serde_json::to_string_pretty(&document)?;

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let mut temp = NamedTempFile::new_in(parent)?;
        temp.write_all(json.as_bytes())?;
        temp.flush()?;
        temp.persist(&self.path)?;

        debug!(path = %self.path.display(), tasks = registry.len(), "board saved");
        Ok(())
    }

    /// Read the three lanes back in their fixed order.
    ///
    /// A missing or unreadable file is an `Io` error; malformed JSON,
    /// an unknown version, or an invalid record is `Corrupt`. The
    /// caller swaps the lanes into its registry only on success.
    pub fn load(&self) -> Result<(Vec<Task>, Vec<Task>, Vec<Task>), StoreError> {
        let contents = std::fs::read_to_string(&self.path)?;
        let document: BoardDocument =
            serde_json::from_str(&contents).map_err(|err| StoreError::Corrupt(err.to_string()))?;
        let lanes = document.into_lanes()?;

        debug!(path = %self.path.display(), "board loaded");
        Ok(lanes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_registry() -> Registry {
        let mut registry = Registry::new();
        registry.add_pending(Task::new("write spec").unwrap());
        registry.add_pending(Task::new("review spec").unwrap());
        registry.move_to_in_progress(0).unwrap();
        registry.set_progress(0, 60).unwrap();
        registry.add_pending(Task::new("archive").unwrap());
        registry.move_to_in_progress(1).unwrap();
        registry.complete(1).unwrap();
        registry
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = BoardStore::new(dir.path().join("board.json"));

        let registry = sample_registry();
        store.save(&registry).unwrap();

        let (pending, in_progress, completed) = store.load().unwrap();
        let mut loaded = Registry::new();
        loaded.replace(pending, in_progress, completed);
        assert_eq!(loaded, registry);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = BoardStore::new(dir.path().join("absent.json"));

        let err = store.load().unwrap_err();
        match err {
            StoreError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("board.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = BoardStore::new(path);
        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn truncated_document_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("board.json");
        // Valid JSON, but the completed lane is missing.
        std::fs::write(&path, r#"{"version":1,"pending":[],"in_progress":[]}"#).unwrap();

        let store = BoardStore::new(path);
        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn future_version_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("board.json");
        std::fs::write(
            &path,
            r#"{"version":2,"pending":[],"in_progress":[],"completed":[]}"#,
        )
        .unwrap();

        let store = BoardStore::new(path);
        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn second_save_replaces_the_first() {
        let dir = TempDir::new().unwrap();
        let store = BoardStore::new(dir.path().join("board.json"));

        store.save(&sample_registry()).unwrap();

        let mut second = Registry::new();
        second.add_pending(Task::new("only one").unwrap());
        store.save(&second).unwrap();

        let (pending, in_progress, completed) = store.load().unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].name(), "only one");
        assert!(in_progress.is_empty());
        assert!(completed.is_empty());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = BoardStore::new(dir.path().join("nested").join("board.json"));

        store.save(&Registry::new()).unwrap();
        assert!(store.path().exists());
    }
}
