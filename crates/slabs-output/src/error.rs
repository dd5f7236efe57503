//! Error types for output generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing the swept table.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to create or write the output file.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Polars failed to serialise the frame.
    #[error("failed to serialise {path}: {message}")]
    DataFrame { path: PathBuf, message: String },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
