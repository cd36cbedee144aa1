//! Enumeration from the server-wide localdomains file.
//!
//! The localdomains file lists every hosted domain (main, addon and sub),
//! one per line. Ownership is not recorded there, so each domain's owner
//! and content root are resolved from control-panel filesystem conventions:
//! per-user files in the users directory (`DNS=` lines) for main domains,
//! `.addondomain`/`.subdomain` marker files under each home directory for
//! the rest, and a document-root existence check as the last resort.

use crate::error::{HostingError, Result};
use crate::record::DomainRecord;
use crate::source::DomainSource;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use vigil_core::DomainName;

/// Enumerates domains from a localdomains file.
pub struct LocaldomainsSource {
    domains_file: PathBuf,
    users_dir: PathBuf,
    home_dir: PathBuf,
}

impl LocaldomainsSource {
    /// Create a source reading the given localdomains file, users directory
    /// and home directory root.
    #[must_use]
    pub fn new(
        domains_file: impl Into<PathBuf>,
        users_dir: impl Into<PathBuf>,
        home_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            domains_file: domains_file.into(),
            users_dir: users_dir.into(),
            home_dir: home_dir.into(),
        }
    }

    /// Resolve the owning account and content root for a domain.
    ///
    /// Tries, in order: main-domain lookup in the users directory,
    /// addon/subdomain marker files, document-root existence.
    fn resolve_owner(&self, domain: &str) -> Option<(String, PathBuf)> {
        if let Some(found) = self.main_domain_owner(domain) {
            return Some(found);
        }
        if let Some(found) = self.marker_file_owner(domain) {
            return Some(found);
        }
        self.docroot_owner(domain)
    }

    /// Main domains: per-user files in the users directory carry a
    /// `DNS=<domain>` line naming the account's primary domain.
    fn main_domain_owner(&self, domain: &str) -> Option<(String, PathBuf)> {
        for (username, path) in sorted_entries(&self.users_dir) {
            if !path.is_file() {
                continue;
            }

            let Ok(contents) = std::fs::read_to_string(&path) else {
                continue;
            };

            for line in contents.lines() {
                if let Some(main_domain) = line.strip_prefix("DNS=") {
                    if main_domain.trim() == domain {
                        let docroot = self.home_dir.join(&username).join("public_html");
                        return Some((username, docroot));
                    }
                }
            }
        }

        None
    }

    /// Addon domains and subdomains: marker files named after the domain,
    /// whose contents are the content root.
    fn marker_file_owner(&self, domain: &str) -> Option<(String, PathBuf)> {
        for (username, user_dir) in sorted_entries(&self.home_dir) {
            if !user_dir.is_dir() {
                continue;
            }

            let addon_marker = user_dir.join(".addondomain").join(domain);
            if addon_marker.is_file() {
                let docroot = read_marker(&addon_marker).unwrap_or_else(|| {
                    self.home_dir
                        .join(&username)
                        .join("public_html")
                        .join(domain)
                });
                return Some((username, docroot));
            }

            let sub_marker = user_dir.join(".subdomain").join(domain);
            if sub_marker.is_file() {
                let docroot = read_marker(&sub_marker).unwrap_or_else(|| {
                    let prefix = domain.split('.').next().unwrap_or(domain);
                    self.home_dir
                        .join(&username)
                        .join("public_html")
                        .join(prefix)
                });
                return Some((username, docroot));
            }
        }

        None
    }

    /// Last resort: a per-domain directory under some account's
    /// `public_html`.
    fn docroot_owner(&self, domain: &str) -> Option<(String, PathBuf)> {
        for (username, user_dir) in sorted_entries(&self.home_dir) {
            if !user_dir.is_dir() {
                continue;
            }

            let domain_path = user_dir.join("public_html").join(domain);
            if domain_path.is_dir() {
                return Some((username, domain_path));
            }
        }

        None
    }
}

impl DomainSource for LocaldomainsSource {
    fn list_domains(&self) -> Result<Vec<DomainRecord>> {
        if !self.domains_file.is_file() {
            return Err(HostingError::SourceNotFound {
                path: self.domains_file.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(&self.domains_file)?;
        let mut records = Vec::new();

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let domain = match DomainName::new(line) {
                Ok(d) => d,
                Err(e) => {
                    warn!(line, error = %e, "skipping malformed domain line");
                    continue;
                }
            };

            match self.resolve_owner(domain.as_str()) {
                Some((owner, content_root)) => {
                    records.push(DomainRecord::new(domain, owner, content_root));
                }
                None => {
                    debug!(domain = %domain, "could not resolve owner, skipping");
                }
            }
        }

        info!(
            count = records.len(),
            file = %self.domains_file.display(),
            "enumerated hosted domains"
        );

        Ok(records)
    }
}

/// Directory entries as `(file_name, path)` pairs, sorted by name so
/// enumeration order is stable.
fn sorted_entries(dir: &Path) -> Vec<(String, PathBuf)> {
    let Ok(read_dir) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut entries: Vec<(String, PathBuf)> = read_dir
        .filter_map(std::result::Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?.to_string();
            Some((name, entry.path()))
        })
        .collect();

    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}

/// Read a marker file's contents as a path, if non-empty.
fn read_marker(path: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(path).ok()?;
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}
