//! Configuration management for Vigil.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main application configuration.
///
/// This is loaded from `~/.config/vigil/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Scanning behavior settings
    pub scanning: ScanningConfig,
    /// Keyword list settings
    pub keywords: KeywordsConfig,
    /// Domain enumeration settings
    pub hosting: HostingConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, falling back to defaults
    /// if the file does not exist.
    pub fn load_from(config_path: &std::path::Path) -> ConfigResult<Self> {
        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(config_path)?;
            let config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `VIGIL_KEYWORDS_FILE`: Override the keyword list path
    /// - `VIGIL_TIMEOUT_SECS`: Override the fetch timeout
    /// - `VIGIL_DENSITY_THRESHOLD`: Override the body-text density threshold
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env();
        Ok(config)
    }

    /// Apply `VIGIL_*` environment variable overrides to this configuration.
    pub fn apply_env(&mut self) {
        if let Ok(val) = std::env::var("VIGIL_KEYWORDS_FILE") {
            if !val.is_empty() {
                self.keywords.file = PathBuf::from(&val);
                tracing::debug!("Override keywords.file from env: {}", val);
            }
        }

        if let Ok(val) = std::env::var("VIGIL_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse() {
                self.scanning.timeout_secs = secs;
                tracing::debug!("Override scanning.timeout_secs from env: {}", secs);
            }
        }

        if let Ok(val) = std::env::var("VIGIL_DENSITY_THRESHOLD") {
            if let Ok(threshold) = val.parse() {
                self.scanning.density_threshold = threshold;
                tracing::debug!("Override scanning.density_threshold from env: {}", threshold);
            }
        }
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        let config_path = Self::config_path()?;
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "config_path".to_string(),
                reason: "no parent directory".to_string(),
            })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/vigil/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("io", "vigil", "vigil").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Scanning behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanningConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent string sent with homepage requests
    pub user_agent: String,
    /// Number of concurrent domain fetches
    pub max_concurrent: usize,
    /// Body-text occurrence count a keyword must exceed to be flagged
    /// (strictly greater than; 2 means three or more occurrences flag)
    pub density_threshold: u32,
    /// Maximum distinct keywords shown per domain in terminal output
    pub max_reported_keywords: usize,
}

impl Default for ScanningConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            user_agent: "Mozilla/5.0 (compatible; Vigil/0.1; hosting abuse scan)".to_string(),
            max_concurrent: 8,
            density_threshold: 2,
            max_reported_keywords: 3,
        }
    }
}

/// Keyword list settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordsConfig {
    /// Path to the keyword file (one keyword per line, `#` comments)
    pub file: PathBuf,
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("/etc/vigil/keywords.txt"),
        }
    }
}

/// Which domain enumeration strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Read the server-wide localdomains file and resolve owners from
    /// control-panel filesystem conventions
    Localdomains,
    /// Invoke a host-management command that prints one domain per line
    Command,
}

/// Domain enumeration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostingConfig {
    /// Enumeration strategy
    pub source: SourceKind,
    /// Path to the localdomains file
    pub domains_file: PathBuf,
    /// Directory of per-user control-panel files (`DNS=` lines)
    pub users_dir: PathBuf,
    /// Home directory root used for owner and content-root resolution
    pub home_dir: PathBuf,
    /// Host-management command and arguments (used when `source = "command"`)
    pub command: Vec<String>,
}

impl Default for HostingConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::Localdomains,
            domains_file: PathBuf::from("/etc/localdomains"),
            users_dir: PathBuf::from("/var/cpanel/users"),
            home_dir: PathBuf::from("/home"),
            command: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.scanning.timeout_secs, 15);
        assert_eq!(config.scanning.density_threshold, 2);
        assert_eq!(config.scanning.max_reported_keywords, 3);
        assert_eq!(config.hosting.source, SourceKind::Localdomains);
        assert_eq!(config.keywords.file, PathBuf::from("/etc/vigil/keywords.txt"));
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("[scanning]"));
        assert!(toml_str.contains("[keywords]"));
        assert!(toml_str.contains("[hosting]"));

        let parsed: AppConfig = toml::from_str(&toml_str).expect("parse serialized config");
        assert_eq!(parsed.scanning.user_agent, config.scanning.user_agent);
    }

    #[test]
    fn test_config_load_from_file() {
        let tmp = TempDir::new().expect("create temp dir");
        let config_path = tmp.path().join("config.toml");

        let mut config = AppConfig::default();
        config.scanning.timeout_secs = 5;
        config.keywords.file = PathBuf::from("/tmp/kw.txt");

        let contents = toml::to_string_pretty(&config).expect("serialize config");
        fs::write(&config_path, contents).expect("write config file");

        let loaded = AppConfig::load_from(&config_path).expect("load config");
        assert_eq!(loaded.scanning.timeout_secs, 5);
        assert_eq!(loaded.keywords.file, PathBuf::from("/tmp/kw.txt"));
    }

    #[test]
    fn test_config_load_missing_file_uses_defaults() {
        let tmp = TempDir::new().expect("create temp dir");
        let loaded = AppConfig::load_from(&tmp.path().join("nope.toml")).expect("load config");
        assert_eq!(loaded.scanning.timeout_secs, 15);
    }

    #[test]
    fn test_env_overrides() {
        std::env::set_var("VIGIL_KEYWORDS_FILE", "/srv/kw.txt");
        std::env::set_var("VIGIL_TIMEOUT_SECS", "7");
        std::env::set_var("VIGIL_DENSITY_THRESHOLD", "3");

        let mut config = AppConfig::default();
        config.apply_env();

        assert_eq!(config.keywords.file, PathBuf::from("/srv/kw.txt"));
        assert_eq!(config.scanning.timeout_secs, 7);
        assert_eq!(config.scanning.density_threshold, 3);

        std::env::remove_var("VIGIL_KEYWORDS_FILE");
        std::env::remove_var("VIGIL_TIMEOUT_SECS");
        std::env::remove_var("VIGIL_DENSITY_THRESHOLD");
    }

    #[test]
    fn test_partial_config() {
        // Partial TOML configs fill the rest with defaults
        let toml_str = r#"
[scanning]
timeout_secs = 30

[hosting]
source = "command"
command = ["/usr/local/bin/list-domains"]
"#;

        let config: AppConfig = toml::from_str(toml_str).expect("parse partial config");
        assert_eq!(config.scanning.timeout_secs, 30);
        assert_eq!(config.hosting.source, SourceKind::Command);
        assert_eq!(config.hosting.command, vec!["/usr/local/bin/list-domains"]);
        // These should be defaults
        assert_eq!(config.scanning.density_threshold, 2);
        assert_eq!(config.hosting.domains_file, PathBuf::from("/etc/localdomains"));
    }
}
