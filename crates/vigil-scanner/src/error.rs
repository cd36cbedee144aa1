//! Scan-level error type.
//!
//! The matcher itself never fails and per-domain fetch failures are
//! swallowed into "no snapshot"; what can fail a scan is its setup —
//! loading the keyword list or enumerating the hosted domains.

use thiserror::Error;

/// Errors that abort a scan before any domain is evaluated.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Keyword list could not be loaded
    #[error("keyword error: {0}")]
    Keywords(#[from] vigil_keywords::KeywordError),

    /// Domain enumeration failed
    #[error("hosting error: {0}")]
    Hosting(#[from] vigil_hosting::HostingError),
}

/// Result type alias using `ScanError`.
pub type Result<T> = std::result::Result<T, ScanError>;
