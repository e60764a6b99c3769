use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown compliance field identifier: {0}")]
    UnknownFieldId(String),
    #[error("unknown field format: {0}")]
    UnknownLogicalType(String),
    #[error("unknown security classification: {0}")]
    UnknownClassification(String),
    #[error("unknown wizard step: {0}")]
    UnknownStep(String),
    #[error("unknown message key: {0}")]
    UnknownMessageKey(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
