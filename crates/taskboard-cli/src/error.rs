/*
[INPUT]:  Domain and persistence errors, façade-level parse failures
[OUTPUT]: Unified command error
[POS]:    Error handling layer - everything a command can fail with
[UPDATE]: When commands gain new failure kinds
*/

use taskboard_core::BoardError;
use taskboard_store::StoreError;
use thiserror::Error;

/// Everything a command can fail with. The kinds stay distinct so the
/// front-end can render distinct messages; none are fatal.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// Progress input that is not a number at all. Numeric but
    /// out-of-bounds input reports `BoardError::ProgressOutOfRange`
    /// instead.
    #[error("not a number: {input:?}")]
    Parse { input: String },
}
