/*
[INPUT]:  Failure cases from task and registry operations
[OUTPUT]: Structured domain error type
[POS]:    Error handling layer - errors returned as values, never fatal
[UPDATE]: When adding new failure cases or improving error messages
*/

use thiserror::Error;

use crate::lane::Lane;

/// Domain errors for board operations. The command layer returns these
/// to the caller; the front-end decides how to render them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Task names must contain at least one non-whitespace character
    #[error("task name must not be blank")]
    BlankName,

    /// Progress is a percentage in [0, 100]
    #[error("progress must be between 0 and 100, got {value}")]
    ProgressOutOfRange { value: i64 },

    /// Stale or absent selection in a lane
    #[error("no task at index {index} in the {lane} lane (holds {len})")]
    IndexOutOfRange {
        lane: Lane,
        index: usize,
        len: usize,
    },
}
