use thiserror::Error;

#[derive(Error, Debug)]
pub enum RolodexError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Position {position} is out of range (valid positions: 1..={len})")]
    OutOfRange { position: usize, len: usize },

    #[error("{0}")]
    Duplicate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RolodexError>;
