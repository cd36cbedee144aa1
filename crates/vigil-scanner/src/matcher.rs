//! Keyword matching against domain names and fetched page text.
//!
//! The matcher is a pure function over its inputs: no I/O, no logging,
//! no failure modes. Malformed input (empty domain, empty keyword list)
//! yields an empty result.

use serde::{Deserialize, Serialize};
use std::fmt;
use vigil_fetch::PageSnapshot;
use vigil_keywords::Keyword;

/// Default body-text occurrence count a keyword must exceed to be flagged.
pub const DEFAULT_DENSITY_THRESHOLD: u32 = 2;

/// Where and how strongly a keyword matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchCategory {
    /// Keyword is a whole word of the domain name
    DomainExact,
    /// Keyword is a substring of the domain name
    DomainPartial,
    /// A 3-character window of the keyword appears in the domain name
    DomainFuzzy,
    /// Keyword is a whole word of the page title
    TitleExact,
    /// Keyword is a substring of the page title
    TitlePartial,
    /// Keyword occurs in the page body more often than the density threshold
    BodyDense,
}

impl MatchCategory {
    /// Short label grouping categories by where they matched, for display.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::DomainExact | Self::DomainPartial | Self::DomainFuzzy => "DOMAIN",
            Self::TitleExact | Self::TitlePartial => "TITLE",
            Self::BodyDense => "CONTENT",
        }
    }
}

impl fmt::Display for MatchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DomainExact => "domain-exact",
            Self::DomainPartial => "domain-partial",
            Self::DomainFuzzy => "domain-fuzzy",
            Self::TitleExact => "title-exact",
            Self::TitlePartial => "title-partial",
            Self::BodyDense => "body-dense",
        };
        write!(f, "{name}")
    }
}

/// One tagged reason a domain was flagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReason {
    /// Match category
    pub category: MatchCategory,
    /// The matched keyword, in its original display form
    pub keyword: String,
    /// Body-text occurrence count (`BodyDense` only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<u32>,
    /// The matched 3-character window (`DomainFuzzy` only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<String>,
}

impl MatchReason {
    fn plain(category: MatchCategory, keyword: &Keyword) -> Self {
        Self {
            category,
            keyword: keyword.display().to_string(),
            occurrences: None,
            segment: None,
        }
    }
}

/// Evaluates keywords against a domain and its fetched homepage.
#[derive(Debug, Clone)]
pub struct Matcher {
    density_threshold: u32,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_DENSITY_THRESHOLD)
    }
}

impl Matcher {
    /// Create a matcher with the given body-text density threshold.
    ///
    /// A keyword is flagged as `BodyDense` when its body occurrence count
    /// is strictly greater than the threshold.
    #[must_use]
    pub fn new(density_threshold: u32) -> Self {
        Self { density_threshold }
    }

    /// Evaluate all keywords against a domain name and, when present, its
    /// page snapshot.
    ///
    /// Domain checks always run; content checks only with a snapshot.
    /// Reasons are ordered: all domain reasons first in keyword order,
    /// then content reasons in keyword order with the title reason before
    /// the body reason per keyword. Per keyword the domain checks are
    /// mutually exclusive (first hit wins: exact, partial, fuzzy); the
    /// title and body checks are independent.
    #[must_use]
    pub fn evaluate(
        &self,
        domain: &str,
        snapshot: Option<&PageSnapshot>,
        keywords: &[Keyword],
    ) -> Vec<MatchReason> {
        if domain.is_empty() {
            return Vec::new();
        }

        let domain_lower = domain.to_lowercase();
        let mut reasons = Vec::new();

        for keyword in keywords.iter().filter(|kw| kw.is_matchable()) {
            if keyword.is_whole_word_in(&domain_lower) {
                reasons.push(MatchReason::plain(MatchCategory::DomainExact, keyword));
            } else if keyword.is_substring_in(&domain_lower) {
                reasons.push(MatchReason::plain(MatchCategory::DomainPartial, keyword));
            } else if let Some(segment) = keyword
                .trigrams()
                .into_iter()
                .find(|window| domain_lower.contains(window))
            {
                let mut reason = MatchReason::plain(MatchCategory::DomainFuzzy, keyword);
                reason.segment = Some(segment.to_string());
                reasons.push(reason);
            }
        }

        if let Some(snapshot) = snapshot {
            let title_lower = snapshot.title.to_lowercase();
            let body_lower = snapshot.body_text.to_lowercase();

            for keyword in keywords.iter().filter(|kw| kw.is_matchable()) {
                if keyword.is_whole_word_in(&title_lower) {
                    reasons.push(MatchReason::plain(MatchCategory::TitleExact, keyword));
                } else if keyword.is_substring_in(&title_lower) {
                    reasons.push(MatchReason::plain(MatchCategory::TitlePartial, keyword));
                }

                let count = keyword.count_in(&body_lower);
                if count > self.density_threshold as usize {
                    let mut reason = MatchReason::plain(MatchCategory::BodyDense, keyword);
                    reason.occurrences = Some(u32::try_from(count).unwrap_or(u32::MAX));
                    reasons.push(reason);
                }
            }
        }

        reasons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<Keyword> {
        words
            .iter()
            .map(|w| Keyword::new(*w).expect("valid keyword"))
            .collect()
    }

    fn categories(reasons: &[MatchReason]) -> Vec<MatchCategory> {
        reasons.iter().map(|r| r.category).collect()
    }

    #[test]
    fn test_domain_partial_match() {
        let matcher = Matcher::default();
        let reasons = matcher.evaluate("mybetsite.com", None, &keywords(&["bet"]));

        assert_eq!(reasons.len(), 1);
        assert_eq!(reasons[0].category, MatchCategory::DomainPartial);
        assert_eq!(reasons[0].keyword, "bet");
    }

    #[test]
    fn test_domain_exact_match_on_word_boundary() {
        let matcher = Matcher::default();
        let reasons = matcher.evaluate("bet.example.com", None, &keywords(&["bet"]));

        assert_eq!(categories(&reasons), vec![MatchCategory::DomainExact]);
    }

    #[test]
    fn test_domain_fuzzy_match_records_segment() {
        let matcher = Matcher::default();
        // "casino" is not a substring of "sinospin.net", but its window "sin" is
        let reasons = matcher.evaluate("sinospin.net", None, &keywords(&["casino"]));

        assert_eq!(reasons.len(), 1);
        assert_eq!(reasons[0].category, MatchCategory::DomainFuzzy);
        assert_eq!(reasons[0].segment.as_deref(), Some("sin"));
    }

    #[test]
    fn test_no_match_at_all() {
        let matcher = Matcher::default();
        let reasons = matcher.evaluate("example.com", None, &keywords(&["casino"]));
        assert!(reasons.is_empty());
    }

    #[test]
    fn test_domain_checks_mutually_exclusive_per_keyword() {
        let matcher = Matcher::default();
        // A whole-word hit must not also produce partial or fuzzy reasons
        let reasons = matcher.evaluate("my-bet.com", None, &keywords(&["bet"]));
        assert_eq!(reasons.len(), 1);
        assert_eq!(reasons[0].category, MatchCategory::DomainExact);
    }

    #[test]
    fn test_short_keywords_never_match() {
        let matcher = Matcher::default();
        let snapshot = PageSnapshot::new("ab ab ab", "ab ab ab ab ab");
        let reasons = matcher.evaluate("ab.example.com", Some(&snapshot), &keywords(&["ab"]));
        assert!(reasons.is_empty());
    }

    #[test]
    fn test_title_and_body_reasons_together() {
        let matcher = Matcher::default();
        let snapshot = PageSnapshot::new("Best Casino Online", "casino casino casino");
        let reasons = matcher.evaluate("example.com", Some(&snapshot), &keywords(&["casino"]));

        assert_eq!(
            categories(&reasons),
            vec![MatchCategory::TitleExact, MatchCategory::BodyDense]
        );
        assert_eq!(reasons[1].occurrences, Some(3));
    }

    #[test]
    fn test_title_partial_match() {
        let matcher = Matcher::default();
        let snapshot = PageSnapshot::new("supercasinos galore", "");
        let reasons = matcher.evaluate("example.com", Some(&snapshot), &keywords(&["casino"]));

        assert_eq!(categories(&reasons), vec![MatchCategory::TitlePartial]);
    }

    #[test]
    fn test_body_density_threshold_is_strict() {
        let matcher = Matcher::default();

        let at_threshold = PageSnapshot::new("", "casino casino");
        assert!(matcher
            .evaluate("example.com", Some(&at_threshold), &keywords(&["casino"]))
            .is_empty());

        let over_threshold = PageSnapshot::new("", "casino casino casino");
        let reasons =
            matcher.evaluate("example.com", Some(&over_threshold), &keywords(&["casino"]));
        assert_eq!(categories(&reasons), vec![MatchCategory::BodyDense]);
    }

    #[test]
    fn test_configurable_density_threshold() {
        let matcher = Matcher::new(3);
        let snapshot = PageSnapshot::new("", "casino casino casino");
        assert!(matcher
            .evaluate("example.com", Some(&snapshot), &keywords(&["casino"]))
            .is_empty());
    }

    #[test]
    fn test_absent_snapshot_never_produces_content_reasons() {
        let matcher = Matcher::default();
        let reasons = matcher.evaluate("casino.example.com", None, &keywords(&["casino"]));

        assert!(reasons
            .iter()
            .all(|r| matches!(r.category, MatchCategory::DomainExact
                | MatchCategory::DomainPartial
                | MatchCategory::DomainFuzzy)));
    }

    #[test]
    fn test_case_insensitive() {
        let matcher = Matcher::default();
        let kws = keywords(&["BET"]);

        let upper = matcher.evaluate("BETsite.com", None, &kws);
        let lower = matcher.evaluate("betsite.com", None, &kws);

        assert_eq!(upper, lower);
        assert_eq!(upper[0].keyword, "BET"); // display form preserved
    }

    #[test]
    fn test_idempotent() {
        let matcher = Matcher::default();
        let kws = keywords(&["bet", "casino", "poker"]);
        let snapshot = PageSnapshot::new("Poker Night", "bet bet bet casino");

        let first = matcher.evaluate("pokerbet.com", Some(&snapshot), &kws);
        let second = matcher.evaluate("pokerbet.com", Some(&snapshot), &kws);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_domain_yields_empty_result() {
        let matcher = Matcher::default();
        let snapshot = PageSnapshot::new("casino", "casino casino casino");
        let reasons = matcher.evaluate("", Some(&snapshot), &keywords(&["casino"]));
        assert!(reasons.is_empty());
    }

    #[test]
    fn test_empty_keyword_list_yields_empty_result() {
        let matcher = Matcher::default();
        let reasons = matcher.evaluate("casino.example.com", None, &[]);
        assert!(reasons.is_empty());
    }

    #[test]
    fn test_reason_ordering_domain_before_content() {
        let matcher = Matcher::default();
        let kws = keywords(&["bet", "casino"]);
        let snapshot = PageSnapshot::new("Casino", "bet bet bet");

        let reasons = matcher.evaluate("bet.example.com", Some(&snapshot), &kws);
        assert_eq!(
            categories(&reasons),
            vec![
                MatchCategory::DomainExact, // bet (domain pass)
                MatchCategory::BodyDense,   // bet (content pass)
                MatchCategory::TitleExact,  // casino (content pass)
            ]
        );
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(MatchCategory::DomainFuzzy.label(), "DOMAIN");
        assert_eq!(MatchCategory::TitlePartial.label(), "TITLE");
        assert_eq!(MatchCategory::BodyDense.label(), "CONTENT");
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&MatchCategory::DomainExact).expect("serialize category");
        assert_eq!(json, "\"domain_exact\"");
    }
}
