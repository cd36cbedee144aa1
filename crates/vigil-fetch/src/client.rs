//! The HTTP homepage fetcher.

use crate::error::Result;
use crate::extract::{snapshot_from_html, PageSnapshot};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use vigil_core::ScanningConfig;

/// Fetches a domain's homepage and distills it.
///
/// The scanner depends on this trait rather than on a concrete client so
/// scans can be driven against stub pages in tests.
#[async_trait]
pub trait PageFetch: Send + Sync {
    /// Fetch and distill `http://{domain}/`.
    ///
    /// # Errors
    /// Any network, timeout or HTTP-status failure. Callers treat errors
    /// as "no snapshot", not as scan failures.
    async fn fetch_homepage(&self, domain: &str) -> Result<PageSnapshot>;
}

/// `PageFetch` implementation backed by a reqwest client.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher from the scanning configuration: bounded request
    /// timeout and a descriptive user agent.
    pub fn new(config: &ScanningConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetch for HttpFetcher {
    async fn fetch_homepage(&self, domain: &str) -> Result<PageSnapshot> {
        let url = format!("http://{domain}/");
        debug!(url, "fetching homepage");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(crate::FetchError::Status {
                code: status.as_u16(),
            });
        }

        let html = response.text().await?;
        Ok(snapshot_from_html(&html))
    }
}
