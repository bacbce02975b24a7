/*
[INPUT]:  Registry lanes / decoded JSON documents
[OUTPUT]: Versioned on-disk board document with validated decoding
[POS]:    Persistence layer - wire format
[UPDATE]: When the document schema or format version changes
*/

use serde::{Deserialize, Serialize};
use taskboard_core::{Registry, Task};

use crate::error::StoreError;

/// Current on-disk format version. Bump on any incompatible schema
/// change; readers reject versions they do not know.
pub const FORMAT_VERSION: u32 = 1;

/// On-disk shape of the whole board. Lane order is fixed: pending,
/// in_progress, completed.
#[derive(Debug, Serialize, Deserialize)]
pub struct BoardDocument {
    pub version: u32,
    pub pending: Vec<TaskRecord>,
    pub in_progress: Vec<TaskRecord>,
    pub completed: Vec<TaskRecord>,
}

/// On-disk shape of a single task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub name: String,
    pub progress: u8,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            name: task.name().to_string(),
            progress: task.progress(),
        }
    }
}

impl TryFrom<TaskRecord> for Task {
    type Error = StoreError;

    fn try_from(record: TaskRecord) -> Result<Self, StoreError> {
        let mut task = Task::new(&record.name)
            .map_err(|err| StoreError::Corrupt(format!("task record: {err}")))?;
        task.set_progress(record.progress)
            .map_err(|err| StoreError::Corrupt(format!("task {:?}: {err}", record.name)))?;
        Ok(task)
    }
}

impl BoardDocument {
    pub fn from_registry(registry: &Registry) -> Self {
        Self {
            version: FORMAT_VERSION,
            pending: registry.pending().iter().map(TaskRecord::from).collect(),
            in_progress: registry.in_progress().iter().map(TaskRecord::from).collect(),
            completed: registry.completed().iter().map(TaskRecord::from).collect(),
        }
    }

    /// Decode into the three lanes, validating every record.
    pub fn into_lanes(self) -> Result<(Vec<Task>, Vec<Task>, Vec<Task>), StoreError> {
        if self.version != FORMAT_VERSION {
            return Err(StoreError::Corrupt(format!(
                "unsupported format version {}, expected {FORMAT_VERSION}",
                self.version
            )));
        }
        Ok((
            decode_lane(self.pending)?,
            decode_lane(self.in_progress)?,
            decode_lane(self.completed)?,
        ))
    }
}

fn decode_lane(records: Vec<TaskRecord>) -> Result<Vec<Task>, StoreError> {
    records.into_iter().map(Task::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_mismatch_is_corrupt() {
        let document = BoardDocument {
            version: 99,
            pending: Vec::new(),
            in_progress: Vec::new(),
            completed: Vec::new(),
        };

        let err = document.into_lanes().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }

    #[test]
    fn out_of_range_record_is_corrupt() {
        let record = TaskRecord {
            name: "over".to_string(),
            progress: 150,
        };
        assert!(matches!(Task::try_from(record), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn blank_name_record_is_corrupt() {
        let record = TaskRecord {
            name: "   ".to_string(),
            progress: 10,
        };
        assert!(matches!(Task::try_from(record), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn registry_round_trips_through_document() {
        let mut registry = Registry::new();
        registry.add_pending(Task::new("a").unwrap());
        registry.add_pending(Task::new("b").unwrap());
        registry.move_to_in_progress(0).unwrap();
        registry.set_progress(0, 30).unwrap();

        let document = BoardDocument::from_registry(&registry);
        let (pending, in_progress, completed) = document.into_lanes().unwrap();

        let mut rebuilt = Registry::new();
        rebuilt.replace(pending, in_progress, completed);
        assert_eq!(rebuilt, registry);
    }
}
