//! The `Keyword` type and its match primitives.

use crate::error::KeywordError;
use regex::Regex;
use std::fmt;

/// Length below which a keyword is too noisy to match on.
pub const MIN_MATCH_LEN: usize = 3;

/// A single keyword from the configured list.
///
/// Keeps the original display form (for reporting) and a lower-cased folded
/// form (for matching), plus a precompiled whole-word pattern. All match
/// primitives expect an already lower-cased haystack.
#[derive(Debug, Clone)]
pub struct Keyword {
    display: String,
    folded: String,
    word_re: Regex,
}

impl Keyword {
    /// Create a keyword from a raw token, trimming surrounding whitespace.
    ///
    /// # Errors
    /// Returns [`KeywordError::Empty`] if the token is empty after trimming.
    pub fn new(raw: impl Into<String>) -> Result<Self, KeywordError> {
        let display = raw.into().trim().to_string();
        if display.is_empty() {
            return Err(KeywordError::Empty);
        }

        let folded = display.to_lowercase();
        // Boundary is any non-alphanumeric character or the string edge.
        // The stock \b would treat '_' as a word character, which is not
        // what a domain-name boundary means here.
        let word_re = Regex::new(&format!(
            "(?:^|[^0-9a-z]){}(?:[^0-9a-z]|$)",
            regex::escape(&folded)
        ))
        .expect("escaped keyword regex is valid");

        Ok(Self {
            display,
            folded,
            word_re,
        })
    }

    /// The keyword as it appeared in the keyword file.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The lower-cased form used for matching.
    #[must_use]
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// Whether this keyword is long enough to match on.
    ///
    /// Keywords shorter than [`MIN_MATCH_LEN`] characters never produce
    /// matches.
    #[must_use]
    pub fn is_matchable(&self) -> bool {
        self.folded.chars().count() >= MIN_MATCH_LEN
    }

    /// Whole-word match: the keyword bounded by non-alphanumeric characters
    /// or the string edges.
    #[must_use]
    pub fn is_whole_word_in(&self, haystack_lower: &str) -> bool {
        self.word_re.is_match(haystack_lower)
    }

    /// Substring match anywhere in the haystack.
    #[must_use]
    pub fn is_substring_in(&self, haystack_lower: &str) -> bool {
        haystack_lower.contains(&self.folded)
    }

    /// Count non-overlapping occurrences of the keyword in the haystack.
    #[must_use]
    pub fn count_in(&self, haystack_lower: &str) -> usize {
        haystack_lower.matches(&self.folded).count()
    }

    /// The 3-character windows of the folded keyword, in order.
    ///
    /// Empty for keywords shorter than [`MIN_MATCH_LEN`].
    #[must_use]
    pub fn trigrams(&self) -> Vec<&str> {
        let indices: Vec<usize> = self.folded.char_indices().map(|(i, _)| i).collect();
        if indices.len() < MIN_MATCH_LEN {
            return Vec::new();
        }

        (0..=indices.len() - MIN_MATCH_LEN)
            .map(|i| {
                let start = indices[i];
                let end = indices
                    .get(i + MIN_MATCH_LEN)
                    .copied()
                    .unwrap_or(self.folded.len());
                &self.folded[start..end]
            })
            .collect()
    }
}

impl PartialEq for Keyword {
    fn eq(&self, other: &Self) -> bool {
        self.display == other.display
    }
}

impl Eq for Keyword {}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display)
    }
}
