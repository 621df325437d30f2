use std::io;
use thiserror::Error;

use motifscan_summary::SchemaViolation;

/// Error type for motifscan-io operations.
#[derive(Error, Debug)]
pub enum SummaryIoError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The hit table has no header line naming its columns.
    #[error("Hit table has no header line")]
    MissingHeader,

    /// A data line couldn't be parsed.
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A text value would break the tab separated layout of the output.
    #[error("Row {row}, column '{column}': value {value:?} contains a tab or line break")]
    InvalidField {
        column: String,
        row: usize,
        value: String,
    },

    /// The table read from disk doesn't fit the summary schema.
    #[error(transparent)]
    Schema(#[from] SchemaViolation),

    #[error("Failed to serialize summary to JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "parquet")]
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[cfg(feature = "parquet")]
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
}

/// Result type alias for motifscan-io operations.
pub type Result<T> = std::result::Result<T, SummaryIoError>;
