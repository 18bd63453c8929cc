use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShiftError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShiftError>;
