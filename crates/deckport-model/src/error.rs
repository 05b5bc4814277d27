use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown row field: {0}")]
    UnknownField(String),
    #[error("card {id} has no finishes")]
    NoFinishes { id: String },
    #[error("invalid quantity '{0}'")]
    InvalidQuantity(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
