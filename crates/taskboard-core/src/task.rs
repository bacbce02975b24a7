/*
[INPUT]:  Task name text and progress values
[OUTPUT]: Validated Task entity
[POS]:    Task domain layer - the single entity the board tracks
[UPDATE]: When task fields or validation rules change
*/

use std::fmt;

use crate::error::BoardError;

/// Maximum progress percentage.
pub const MAX_PROGRESS: u8 = 100;

/// A tracked task: a display name and a manual progress percentage.
///
/// Both fields are validated at the mutation boundary; a constructed
/// `Task` always has a non-blank name and progress in [0, 100].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    name: String,
    progress: u8,
}

impl Task {
    /// Create a task with progress 0. The name is trimmed; a blank
    /// name is rejected.
    pub fn new(name: &str) -> Result<Self, BoardError> {
        let name = normalized_name(name)?;
        Ok(Self { name, progress: 0 })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Rename in place, with the same blank check as construction. The
    /// old name survives a rejected rename.
    pub fn rename(&mut self, name: &str) -> Result<(), BoardError> {
        self.name = normalized_name(name)?;
        Ok(())
    }

    /// Set progress. Values above 100 are rejected and leave the task
    /// unchanged.
    pub fn set_progress(&mut self, value: u8) -> Result<(), BoardError> {
        if value > MAX_PROGRESS {
            return Err(BoardError::ProgressOutOfRange {
                value: i64::from(value),
            });
        }
        self.progress = value;
        Ok(())
    }

    /// Completion always lands at 100%, whatever the progress was.
    pub(crate) fn force_complete(&mut self) {
        self.progress = MAX_PROGRESS;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}%)", self.name, self.progress)
    }
}

fn normalized_name(name: &str) -> Result<String, BoardError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(BoardError::BlankName);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_at_zero() {
        let task = Task::new("write report").unwrap();
        assert_eq!(task.name(), "write report");
        assert_eq!(task.progress(), 0);
    }

    #[test]
    fn name_is_trimmed() {
        let task = Task::new("  padded  ").unwrap();
        assert_eq!(task.name(), "padded");
    }

    #[test]
    fn blank_names_rejected() {
        assert_eq!(Task::new(""), Err(BoardError::BlankName));
        assert_eq!(Task::new("   "), Err(BoardError::BlankName));
        assert_eq!(Task::new("\t\n"), Err(BoardError::BlankName));
    }

    #[test]
    fn rename_keeps_old_name_on_error() {
        let mut task = Task::new("original").unwrap();
        assert_eq!(task.rename("  "), Err(BoardError::BlankName));
        assert_eq!(task.name(), "original");

        task.rename("updated").unwrap();
        assert_eq!(task.name(), "updated");
    }

    #[test]
    fn progress_bounds() {
        let mut task = Task::new("bounded").unwrap();
        task.set_progress(0).unwrap();
        task.set_progress(100).unwrap();
        assert_eq!(task.progress(), 100);

        let err = task.set_progress(101).unwrap_err();
        assert_eq!(err, BoardError::ProgressOutOfRange { value: 101 });
        assert_eq!(task.progress(), 100);
    }

    #[test]
    fn display_format() {
        let mut task = Task::new("ship it").unwrap();
        task.set_progress(40).unwrap();
        assert_eq!(task.to_string(), "ship it (40%)");
    }
}
