//! Scan orchestration across all hosted domains.
//!
//! The `Scanner` drives a full run: enumerate domains, fetch each homepage,
//! evaluate the matcher, collect a report. Domains are independent, so up
//! to `max_concurrent` fetches are in flight at once; a failed fetch
//! narrows that domain to name-only checks and never fails the scan.

use crate::error::Result;
use crate::matcher::Matcher;
use crate::report::{ScanReport, ScanResult};
use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, info};
use vigil_core::ScanId;
use vigil_fetch::PageFetch;
use vigil_hosting::{DomainRecord, DomainSource};
use vigil_keywords::{Keyword, KeywordLoader};

/// Default number of concurrent homepage fetches.
const DEFAULT_MAX_CONCURRENT: usize = 8;

/// Orchestrates a full scan over the hosted domains.
pub struct Scanner<F> {
    fetcher: F,
    matcher: Matcher,
    max_concurrent: usize,
}

impl<F: PageFetch> Scanner<F> {
    /// Create a scanner around a page fetcher with default settings.
    #[must_use]
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            matcher: Matcher::default(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }

    /// Replace the matcher (for a non-default density threshold).
    #[must_use]
    pub fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Set the maximum number of concurrent fetches.
    #[must_use]
    pub fn with_max_concurrent(mut self, max: usize) -> Self {
        self.max_concurrent = max.max(1);
        self
    }

    /// Load keywords, enumerate domains and run a full scan.
    ///
    /// # Errors
    /// Fails only on setup: a missing keyword file or a failed
    /// enumeration. Per-domain fetch failures never fail the scan.
    pub async fn run_from(
        &self,
        source: &dyn DomainSource,
        loader: &KeywordLoader,
    ) -> Result<ScanReport> {
        let keywords = loader.load()?;
        let records = source.list_domains()?;
        Ok(self.run(records, &keywords).await)
    }

    /// Run a full scan over the given records.
    pub async fn run(&self, records: Vec<DomainRecord>, keywords: &[Keyword]) -> ScanReport {
        let scan_id = ScanId::generate();
        let started_at = chrono::Utc::now();

        info!(
            scan_id = %scan_id,
            domains = records.len(),
            keywords = keywords.len(),
            "starting scan"
        );

        let mut futures = FuturesUnordered::new();
        let mut results = Vec::with_capacity(records.len());

        for record in records {
            futures.push(self.scan_domain(record, keywords));

            // Respect concurrency limit
            while futures.len() >= self.max_concurrent {
                if let Some(result) = futures.next().await {
                    results.push(result);
                }
            }
        }

        // Collect remaining results
        while let Some(result) = futures.next().await {
            results.push(result);
        }

        let report = ScanReport {
            scan_id,
            started_at,
            finished_at: chrono::Utc::now(),
            keywords_loaded: keywords.len(),
            domains_scanned: results.len(),
            results,
        };

        info!(
            scan_id = %report.scan_id,
            scanned = report.domains_scanned,
            flagged = report.flagged_count(),
            "scan finished"
        );

        report
    }

    /// Fetch one domain's homepage and evaluate it.
    ///
    /// A fetch failure is not an error: the domain evaluates with no
    /// snapshot, which narrows the checks to the domain name.
    async fn scan_domain(&self, record: DomainRecord, keywords: &[Keyword]) -> ScanResult {
        let snapshot = match self.fetcher.fetch_homepage(record.domain.as_str()).await {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                debug!(domain = %record.domain, error = %e, "homepage fetch failed, scanning name only");
                None
            }
        };

        let reasons = self
            .matcher
            .evaluate(record.domain.as_str(), snapshot.as_ref(), keywords);

        if !reasons.is_empty() {
            debug!(
                domain = %record.domain,
                owner = %record.owner,
                reasons = reasons.len(),
                "domain flagged"
            );
        }

        ScanResult::new(record, reasons)
    }
}
