//! Error types for the sweep transform.

use thiserror::Error;

/// Errors raised while sweeping a table.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The reference column is not in the table.
    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;
