//! Keyword file loading.
//!
//! The keyword file is plain text: one keyword per line, `#`-prefixed lines
//! are comments, blank lines are skipped.

use crate::error::{KeywordError, Result};
use crate::keyword::{Keyword, MIN_MATCH_LEN};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Loader for the keyword list file.
pub struct KeywordLoader {
    path: PathBuf,
}

impl KeywordLoader {
    /// Create a loader for the given keyword file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this loader reads from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all keywords from the file.
    ///
    /// Comment and blank lines are skipped. Keywords shorter than
    /// [`MIN_MATCH_LEN`] characters are dropped here so the match loop
    /// never sees them.
    ///
    /// # Errors
    /// Returns [`KeywordError::NotFound`] if the file does not exist, or an
    /// I/O error if it cannot be read.
    pub fn load(&self) -> Result<Vec<Keyword>> {
        if !self.path.exists() {
            return Err(KeywordError::NotFound {
                path: self.path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(&self.path)?;

        let mut keywords = Vec::new();
        let mut dropped = 0usize;

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let keyword = match Keyword::new(line) {
                Ok(kw) => kw,
                Err(_) => continue,
            };

            if keyword.is_matchable() {
                keywords.push(keyword);
            } else {
                debug!(keyword = %keyword, "dropping keyword shorter than {MIN_MATCH_LEN} characters");
                dropped += 1;
            }
        }

        if dropped > 0 {
            debug!(count = dropped, "dropped short keywords");
        }

        if keywords.is_empty() {
            warn!(path = %self.path.display(), "keyword file contains no usable keywords");
        }

        info!(
            count = keywords.len(),
            path = %self.path.display(),
            "loaded keywords"
        );

        Ok(keywords)
    }
}
