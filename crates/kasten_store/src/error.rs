//! Error types for the artifact store.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while talking to the artifact store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The database could not be opened or reached at all.
    #[error("artifact store unavailable: {0}")]
    Unavailable(#[source] rusqlite::Error),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("no artifact with id {0}")]
    ArtifactNotFound(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
