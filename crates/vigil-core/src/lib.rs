//! Vigil Core - Foundation crate for the Vigil hosting-abuse scanner.
//!
//! This crate provides shared types, error handling and configuration
//! management that all other Vigil crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared newtypes (`ScanId`, `DomainName`)
//!
//! # Example
//!
//! ```rust
//! use vigil_core::{AppConfig, DomainName};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! assert!(config.scanning.timeout_secs > 0);
//!
//! let domain = DomainName::new("example.com")?;
//! assert_eq!(domain.as_str(), "example.com");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, HostingConfig, KeywordsConfig, ScanningConfig, SourceKind};
pub use error::{ConfigError, ConfigResult, Result, VigilError};
pub use types::{DomainName, ScanId};
