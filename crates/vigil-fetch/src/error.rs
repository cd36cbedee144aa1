use thiserror::Error;

/// Errors from homepage fetching.
///
/// A fetch error never fails a scan: the orchestrator turns it into an
/// absent snapshot and the domain evaluates on its name alone.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected HTTP status {code}")]
    Status { code: u16 },
}

pub type Result<T> = std::result::Result<T, FetchError>;
