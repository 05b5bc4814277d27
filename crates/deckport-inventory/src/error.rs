use thiserror::Error;

use deckport_model::ModelError;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("row {index} out of range ({len} rows)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, InventoryError>;
