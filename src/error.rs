use thiserror::Error;

pub type Result<T> = std::result::Result<T, WfgError>;

#[derive(Debug, Error)]
pub enum WfgError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("decision vector has {actual} values, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("malformed problem config: {0}")]
    Config(#[from] serde_json::Error),
}

pub fn invalid_configuration(message: impl Into<String>) -> WfgError
{
    WfgError::InvalidConfiguration(message.into())
}
