//! Error handling for snapshot loading and report configuration.
//!
//! Reports themselves never fail: integrity faults are skipped while the
//! snapshot is built and guard violations exclude the offending group. The
//! variants here cover the storage collaborator and configuration.

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Specialized error type for the olympic-stats crate
#[derive(Debug, thiserror::Error)]
pub enum OlympicsError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error processing Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Error decoding Arrow record batches
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error mapping record batches to entity records
    #[error("Record conversion error: {0}")]
    SerdeArrow(#[from] serde_arrow::Error),

    /// A table file expected by the loader does not exist
    #[error("Missing table '{table}' at {}", path.display())]
    MissingTable {
        /// Logical table name
        table: &'static str,
        /// Path that was probed
        path: PathBuf,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for olympic-stats operations
pub type Result<T> = std::result::Result<T, OlympicsError>;
