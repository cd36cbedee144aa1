use thiserror::Error;

/// Errors from keyword construction and loading.
#[derive(Debug, Error)]
pub enum KeywordError {
    #[error("keyword file not found at {path}")]
    NotFound { path: String },

    #[error("keyword cannot be empty")]
    Empty,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KeywordError>;
