/*
[INPUT]:  Caller commands with raw text and index arguments
[OUTPUT]: Validated registry mutations plus save/load
[POS]:    Command layer - the surface a UI, CLI, or test drives
[UPDATE]: When the command set or input normalization changes
*/

use taskboard_core::{BoardError, Registry, Task};
use taskboard_store::BoardStore;
use tracing::info;

use crate::error::CommandError;

/// The command façade: owns the registry and its store, and exposes
/// the operations a front-end invokes. One logical actor; every call
/// runs to completion before the next is accepted.
#[derive(Debug)]
pub struct Commands {
    registry: Registry,
    store: BoardStore,
}

impl Commands {
    /// Start with an empty board.
    pub fn new(store: BoardStore) -> Self {
        Self {
            registry: Registry::new(),
            store,
        }
    }

    /// Start from an already-hydrated registry.
    pub fn with_registry(registry: Registry, store: BoardStore) -> Self {
        Self { registry, store }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    /// Add a task to the pending lane. The name is trimmed; blank
    /// input is rejected.
    pub fn add_task(&mut self, name: &str) -> Result<(), CommandError> {
        let task = Task::new(name)?;
        self.registry.add_pending(task);
        Ok(())
    }

    /// Rename a pending task.
    pub fn edit_task(&mut self, index: usize, name: &str) -> Result<(), CommandError> {
        self.registry.edit_pending(index, name)?;
        Ok(())
    }

    /// Advance a pending task into the in-progress lane.
    pub fn move_to_in_progress(&mut self, index: usize) -> Result<(), CommandError> {
        self.registry.move_to_in_progress(index)?;
        Ok(())
    }

    /// Parse and apply a progress value from raw text. Non-numeric
    /// text and out-of-range numbers fail with different kinds.
    pub fn set_progress(&mut self, index: usize, input: &str) -> Result<(), CommandError> {
        let value = parse_progress(input)?;
        self.registry.set_progress(index, value)?;
        Ok(())
    }

    /// Complete an in-progress task; its progress becomes 100.
    pub fn complete_task(&mut self, index: usize) -> Result<(), CommandError> {
        self.registry.complete(index)?;
        Ok(())
    }

    /// Sort the pending lane by name.
    pub fn sort_tasks(&mut self) {
        self.registry.sort_pending();
    }

    /// Empty the completed lane. Irreversible, no confirmation step.
    pub fn clear_completed(&mut self) {
        self.registry.clear_completed();
    }

    /// Persist the whole board.
    pub fn save(&self) -> Result<(), CommandError> {
        self.store.save(&self.registry)?;
        info!(path = %self.store.path().display(), "board saved");
        Ok(())
    }

    /// Reload the board from disk. The in-memory registry is replaced
    /// only after a successful decode; a failed load leaves it exactly
    /// as it was.
    pub fn load(&mut self) -> Result<(), CommandError> {
        let (pending, in_progress, completed) = self.store.load()?;
        self.registry.replace(pending, in_progress, completed);
        info!(
            path = %self.store.path().display(),
            tasks = self.registry.len(),
            "board loaded"
        );
        Ok(())
    }
}

fn parse_progress(input: &str) -> Result<u8, CommandError> {
    let trimmed = input.trim();
    // Parse through i64 so "-5" reports an out-of-range value rather
    // than a parse failure.
    let value: i64 = trimmed.parse().map_err(|_| CommandError::Parse {
        input: trimmed.to_string(),
    })?;
    if !(0..=100).contains(&value) {
        return Err(BoardError::ProgressOutOfRange { value }.into());
    }
    Ok(value as u8)
}
