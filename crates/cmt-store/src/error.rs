//! Store error types. Read-side failures are recovered internally; only
//! persistence failures reach the caller.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from persisting the assessment blob.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The blob file could not be written.
    #[error("failed to write assessment store {}: {source}", path.display())]
    Write {
        /// The blob path.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// The in-memory map could not be serialized.
    #[error("failed to serialize assessment store: {0}")]
    Serialize(#[from] serde_json::Error),
}
