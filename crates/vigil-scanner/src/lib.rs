//! Vigil Scanner - keyword matching and scan orchestration.
//!
//! This crate holds the core of the tool: the [`Matcher`], a pure function
//! from a domain name, an optional page snapshot and a keyword list to a
//! sequence of tagged [`MatchReason`]s; the reporting types that carry a
//! full scan's results; and the [`Scanner`] orchestrator that drives
//! enumerate, fetch and evaluate across all hosted domains with bounded
//! concurrency.
//!
//! # Match categories
//!
//! Domain-name checks always run; content checks only when the homepage
//! fetch produced a snapshot. Per keyword the domain checks are tiered
//! (exact word, substring, 3-character fuzzy overlap, first hit wins);
//! title and body-density checks are independent of each other.
//!
//! # Example
//!
//! ```rust
//! use vigil_keywords::Keyword;
//! use vigil_scanner::{MatchCategory, Matcher};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let keywords = vec![Keyword::new("casino")?];
//! let matcher = Matcher::default();
//!
//! let reasons = matcher.evaluate("grand-casino.example", None, &keywords);
//! assert_eq!(reasons[0].category, MatchCategory::DomainExact);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod error;
pub mod matcher;
pub mod orchestrator;
pub mod report;

// Re-export commonly used types
pub use error::{Result, ScanError};
pub use matcher::{MatchCategory, MatchReason, Matcher};
pub use orchestrator::Scanner;
pub use report::{ReasonSummary, ScanReport, ScanResult};
