//! Shared types used across the Vigil scanner.
//!
//! This module defines common newtypes that provide type safety
//! and clear domain modeling.

use crate::error::VigilError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Newtype for scan run identifiers.
///
/// Scan IDs are UUIDs (v4 format) stamped on every scan report so log
/// lines and exported reports can be correlated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScanId(String);

impl ScanId {
    /// Create a new `ScanId` from a string.
    ///
    /// # Errors
    /// Returns error if the ID is not a valid UUID v4.
    pub fn new(id: impl Into<String>) -> Result<Self, VigilError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    /// Create a new random `ScanId` using UUID v4.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that a string is a valid UUID v4.
    fn validate(id: &str) -> Result<(), VigilError> {
        static UUID_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = UUID_REGEX.get_or_init(|| {
            Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
                .expect("valid regex")
        });

        if regex.is_match(id) {
            Ok(())
        } else {
            Err(VigilError::Validation(format!(
                "invalid scan ID: must be a valid UUID v4, got '{id}'"
            )))
        }
    }
}

impl fmt::Display for ScanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Newtype for hosted domain names with validation.
///
/// Domain names are lower-cased on construction. Labels are alphanumeric
/// with interior hyphens, separated by dots, 253 characters max.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainName(String);

impl DomainName {
    /// Create a new `DomainName` from a string, lower-casing it.
    ///
    /// # Errors
    /// Returns error if the name is not a valid hostname.
    pub fn new(name: impl Into<String>) -> Result<Self, VigilError> {
        let name = name.into().trim().to_lowercase();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate hostname format: dot-separated alphanumeric labels with
    /// interior hyphens.
    fn validate(name: &str) -> Result<(), VigilError> {
        static DOMAIN_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = DOMAIN_REGEX.get_or_init(|| {
            Regex::new(r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?(\.[a-z0-9]([a-z0-9-]*[a-z0-9])?)+$")
                .expect("valid regex")
        });

        if name.is_empty() || name.len() > 253 {
            return Err(VigilError::Validation(format!(
                "invalid domain name: must be 1-253 characters, got {} characters",
                name.len()
            )));
        }

        if regex.is_match(name) {
            Ok(())
        } else {
            Err(VigilError::Validation(format!(
                "invalid domain name: '{name}'"
            )))
        }
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
