use thiserror::Error;

/// Errors from domain enumeration.
#[derive(Debug, Error)]
pub enum HostingError {
    #[error("domains file not found at {path}")]
    SourceNotFound { path: String },

    #[error("no host-management command configured")]
    NoCommand,

    #[error("host-management command failed ({status}): {stderr}")]
    CommandFailed { status: String, stderr: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HostingError>;
