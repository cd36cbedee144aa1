//! The `DomainRecord` produced by every enumeration strategy.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use vigil_core::DomainName;

/// One hosted domain: the name, the account that owns it, and the
/// filesystem directory its site is served from.
///
/// Records are immutable once produced by a [`crate::DomainSource`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecord {
    /// The hosted domain name
    pub domain: DomainName,
    /// The hosting account that owns the domain
    pub owner: String,
    /// The domain's document root
    pub content_root: PathBuf,
}

impl DomainRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(domain: DomainName, owner: impl Into<String>, content_root: impl Into<PathBuf>) -> Self {
        Self {
            domain,
            owner: owner.into(),
            content_root: content_root.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serialization() {
        let record = DomainRecord::new(
            DomainName::new("example.com").expect("valid domain"),
            "alice",
            "/home/alice/public_html",
        );

        let json = serde_json::to_string(&record).expect("serialize record");
        assert!(json.contains("\"example.com\""));
        assert!(json.contains("\"alice\""));

        let parsed: DomainRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(parsed, record);
    }
}
