/*
[INPUT]:  Error sources (filesystem, JSON, temp-file commit)
[OUTPUT]: Structured error type for the persistence layer
[POS]:    Error handling layer - keeps I/O and corruption distinct
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Errors from the persistence layer.
///
/// `Io` and `Corrupt` stay separate kinds so callers can tell a
/// missing or unreadable file from a malformed one.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure: missing file, permissions, disk full
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failed on the write path
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Committing the temp file over the board file failed
    #[error("temporary file error: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// The board file exists but cannot be decoded
    #[error("corrupt board file: {0}")]
    Corrupt(String),
}
