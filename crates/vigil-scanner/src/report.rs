//! Scan result and report types.
//!
//! A [`ScanResult`] is produced once per domain per run and is immutable;
//! the [`ScanReport`] collects them with run metadata for rendering or
//! JSON export. The reason cap is a presentation concern: `reasons`
//! always holds the full list and [`ScanResult::summary`] truncates at
//! render time while preserving the true total.

use crate::matcher::MatchReason;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vigil_core::ScanId;
use vigil_hosting::DomainRecord;

/// The outcome of evaluating one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// The domain that was evaluated
    pub record: DomainRecord,
    /// All match reasons, in evaluation order
    pub reasons: Vec<MatchReason>,
}

impl ScanResult {
    /// Create a result.
    #[must_use]
    pub fn new(record: DomainRecord, reasons: Vec<MatchReason>) -> Self {
        Self { record, reasons }
    }

    /// Whether any keyword matched this domain.
    #[must_use]
    pub fn is_flagged(&self) -> bool {
        !self.reasons.is_empty()
    }

    /// Truncate the reason list for display: the first reason of each of
    /// the first `limit` distinct keywords, plus the true total count.
    #[must_use]
    pub fn summary(&self, limit: usize) -> ReasonSummary {
        let mut shown = Vec::new();
        let mut seen: Vec<&str> = Vec::new();

        for reason in &self.reasons {
            if seen.contains(&reason.keyword.as_str()) {
                continue;
            }
            seen.push(&reason.keyword);
            shown.push(reason.clone());
            if shown.len() >= limit {
                break;
            }
        }

        ReasonSummary {
            shown,
            total: self.reasons.len(),
        }
    }
}

/// A display-capped view of a result's reasons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasonSummary {
    /// The reasons to show
    pub shown: Vec<MatchReason>,
    /// The true total reason count before capping
    pub total: usize,
}

impl ReasonSummary {
    /// How many reasons the cap hid.
    #[must_use]
    pub fn hidden(&self) -> usize {
        self.total.saturating_sub(self.shown.len())
    }
}

/// The output of a full scan run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Identifier of this scan run
    pub scan_id: ScanId,
    /// When the scan started
    pub started_at: DateTime<Utc>,
    /// When the scan finished
    pub finished_at: DateTime<Utc>,
    /// Number of keywords loaded
    pub keywords_loaded: usize,
    /// Number of domains evaluated
    pub domains_scanned: usize,
    /// Per-domain results
    pub results: Vec<ScanResult>,
}

impl ScanReport {
    /// The results that matched at least one keyword.
    pub fn flagged(&self) -> impl Iterator<Item = &ScanResult> {
        self.results.iter().filter(|r| r.is_flagged())
    }

    /// Number of flagged domains.
    #[must_use]
    pub fn flagged_count(&self) -> usize {
        self.flagged().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MatchCategory;
    use vigil_core::DomainName;

    fn reason(category: MatchCategory, keyword: &str) -> MatchReason {
        MatchReason {
            category,
            keyword: keyword.to_string(),
            occurrences: None,
            segment: None,
        }
    }

    fn result_with_reasons(reasons: Vec<MatchReason>) -> ScanResult {
        ScanResult::new(
            DomainRecord::new(
                DomainName::new("example.com").expect("valid domain"),
                "alice",
                "/home/alice/public_html",
            ),
            reasons,
        )
    }

    #[test]
    fn test_summary_caps_by_distinct_keyword() {
        let result = result_with_reasons(vec![
            reason(MatchCategory::DomainPartial, "bet"),
            reason(MatchCategory::BodyDense, "bet"),
            reason(MatchCategory::DomainExact, "casino"),
            reason(MatchCategory::TitleExact, "poker"),
            reason(MatchCategory::DomainPartial, "slots"),
        ]);

        let summary = result.summary(3);
        let shown_keywords: Vec<&str> =
            summary.shown.iter().map(|r| r.keyword.as_str()).collect();

        assert_eq!(shown_keywords, vec!["bet", "casino", "poker"]);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.hidden(), 2);
    }

    #[test]
    fn test_summary_keeps_first_reason_per_keyword() {
        let result = result_with_reasons(vec![
            reason(MatchCategory::DomainPartial, "bet"),
            reason(MatchCategory::BodyDense, "bet"),
        ]);

        let summary = result.summary(3);
        assert_eq!(summary.shown.len(), 1);
        assert_eq!(summary.shown[0].category, MatchCategory::DomainPartial);
        assert_eq!(summary.total, 2);
    }

    #[test]
    fn test_summary_under_cap() {
        let result = result_with_reasons(vec![reason(MatchCategory::DomainExact, "bet")]);
        let summary = result.summary(3);
        assert_eq!(summary.shown.len(), 1);
        assert_eq!(summary.hidden(), 0);
    }

    #[test]
    fn test_is_flagged() {
        assert!(!result_with_reasons(Vec::new()).is_flagged());
        assert!(result_with_reasons(vec![reason(MatchCategory::DomainExact, "bet")]).is_flagged());
    }

    #[test]
    fn test_report_flagged_count() {
        let report = ScanReport {
            scan_id: ScanId::generate(),
            started_at: Utc::now(),
            finished_at: Utc::now(),
            keywords_loaded: 2,
            domains_scanned: 2,
            results: vec![
                result_with_reasons(Vec::new()),
                result_with_reasons(vec![reason(MatchCategory::DomainExact, "bet")]),
            ],
        };

        assert_eq!(report.flagged_count(), 1);
    }

    #[test]
    fn test_report_serialization_round_trip() {
        let report = ScanReport {
            scan_id: ScanId::generate(),
            started_at: Utc::now(),
            finished_at: Utc::now(),
            keywords_loaded: 1,
            domains_scanned: 1,
            results: vec![result_with_reasons(vec![reason(
                MatchCategory::DomainFuzzy,
                "casino",
            )])],
        };

        let json = serde_json::to_string_pretty(&report).expect("serialize report");
        let parsed: ScanReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(parsed.results, report.results);
        assert_eq!(parsed.scan_id, report.scan_id);
    }
}
