//! The pluggable enumeration strategy trait.

use crate::command::CommandSource;
use crate::error::Result;
use crate::localdomains::LocaldomainsSource;
use crate::record::DomainRecord;
use vigil_core::{HostingConfig, SourceKind};

/// A strategy that enumerates the domains hosted on this server.
///
/// Implementations are synchronous: enumeration reads local files or runs
/// a local command, never the network.
pub trait DomainSource: Send + Sync {
    /// Enumerate all hosted domains.
    fn list_domains(&self) -> Result<Vec<DomainRecord>>;
}

/// Build the configured enumeration strategy.
///
/// # Errors
/// Returns [`crate::HostingError::NoCommand`] when the command strategy is
/// selected but no command is configured.
pub fn source_from_config(config: &HostingConfig) -> Result<Box<dyn DomainSource>> {
    match config.source {
        SourceKind::Localdomains => Ok(Box::new(LocaldomainsSource::new(
            &config.domains_file,
            &config.users_dir,
            &config.home_dir,
        ))),
        SourceKind::Command => {
            let source = CommandSource::from_command(&config.command, &config.home_dir)?;
            Ok(Box::new(source))
        }
    }
}
