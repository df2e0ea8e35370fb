//! Error types for costar-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for costar-core loading operations.
pub type Result<T> = std::result::Result<T, CostarError>;

/// Errors that can occur while loading a record stream.
///
/// Malformed record groups are not errors; they are dropped by the builder.
/// Unknown entities are not errors either; path queries report them as `None`.
#[derive(Error, Debug)]
pub enum CostarError {
    /// The record file could not be opened.
    #[error("Failed to open record file {}: {source}", path.display())]
    Open {
        /// Path that was passed to the loader.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Reading from the record stream failed part way through.
    #[error("Failed to read record stream: {0}")]
    Read(#[from] std::io::Error),
}
