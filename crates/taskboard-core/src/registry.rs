/*
[INPUT]:  Task entities and caller-selected lane indices
[OUTPUT]: Three ordered lanes with validated mutations
[POS]:    Task domain layer - owns every task on the board
[UPDATE]: When lane operations or invariants change
*/

use tracing::debug;

use crate::error::BoardError;
use crate::lane::Lane;
use crate::task::Task;

/// The board registry: three ordered lanes, every task in exactly one.
///
/// Moves are atomic remove-then-append; a failed index check leaves all
/// lanes untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    pending: Vec<Task>,
    in_progress: Vec<Task>,
    completed: Vec<Task>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &[Task] {
        &self.pending
    }

    pub fn in_progress(&self) -> &[Task] {
        &self.in_progress
    }

    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    /// Total number of tasks across all lanes.
    pub fn len(&self) -> usize {
        self.pending.len() + self.in_progress.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a task to the pending lane, insertion order preserved.
    pub fn add_pending(&mut self, task: Task) {
        debug!(name = task.name(), "add pending task");
        self.pending.push(task);
    }

    /// Rename a pending task in place.
    pub fn edit_pending(&mut self, index: usize, name: &str) -> Result<(), BoardError> {
        let len = self.pending.len();
        let task = self
            .pending
            .get_mut(index)
            .ok_or(BoardError::IndexOutOfRange {
                lane: Lane::Pending,
                index,
                len,
            })?;
        task.rename(name)
    }

    /// Sort the pending lane by name, case-sensitive ascending. The
    /// sort is stable, so tasks with equal names keep their insertion
    /// order.
    pub fn sort_pending(&mut self) {
        self.pending.sort_by(|a, b| a.name().cmp(b.name()));
    }

    /// Advance a pending task into the in-progress lane.
    pub fn move_to_in_progress(&mut self, index: usize) -> Result<(), BoardError> {
        let len = self.pending.len();
        if index >= len {
            return Err(BoardError::IndexOutOfRange {
                lane: Lane::Pending,
                index,
                len,
            });
        }
        let task = self.pending.remove(index);
        debug!(name = task.name(), "pending -> in progress");
        self.in_progress.push(task);
        Ok(())
    }

    /// Set progress on an in-progress task.
    pub fn set_progress(&mut self, index: usize, value: u8) -> Result<(), BoardError> {
        let len = self.in_progress.len();
        let task = self
            .in_progress
            .get_mut(index)
            .ok_or(BoardError::IndexOutOfRange {
                lane: Lane::InProgress,
                index,
                len,
            })?;
        task.set_progress(value)
    }

    /// Complete an in-progress task: progress is forced to 100 and the
    /// task moves to the completed lane.
    pub fn complete(&mut self, index: usize) -> Result<(), BoardError> {
        let len = self.in_progress.len();
        if index >= len {
            return Err(BoardError::IndexOutOfRange {
                lane: Lane::InProgress,
                index,
                len,
            });
        }
        let mut task = self.in_progress.remove(index);
        task.force_complete();
        debug!(name = task.name(), "in progress -> completed");
        self.completed.push(task);
        Ok(())
    }

    /// Drop every completed task. A no-op on an empty lane.
    pub fn clear_completed(&mut self) {
        if !self.completed.is_empty() {
            debug!(count = self.completed.len(), "clear completed lane");
        }
        self.completed.clear();
    }

    /// Replace all three lanes wholesale. Used when hydrating from a
    /// loaded document; observable as a single transition.
    pub fn replace(&mut self, pending: Vec<Task>, in_progress: Vec<Task>, completed: Vec<Task>) {
        self.pending = pending;
        self.in_progress = in_progress;
        self.completed = completed;
    }
}
