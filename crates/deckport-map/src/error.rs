//! Error types for mapping operations.

use thiserror::Error;

/// Errors from mapping operations.
#[derive(Debug, Error)]
pub enum MappingError {
    /// Export column index past the end of the column list.
    #[error("column {index} out of range ({len} columns)")]
    ColumnOutOfRange { index: usize, len: usize },
    /// Preset name not recognised.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
    /// Settings JSON could not be parsed or produced.
    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MappingError>;
