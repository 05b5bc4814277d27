//! Error types for CSV file access.
//!
//! Parsing itself never fails; only reading and writing files can.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for CSV file operations.
pub type Result<T> = std::result::Result<T, CsvError>;
