//! Enumeration via a host-management command.
//!
//! For panels without a localdomains file, the domain list can come from a
//! configured command instead. Each stdout line is `domain owner
//! [content_root]`, whitespace-separated. A missing content root defaults
//! to the conventional `{home}/{owner}/public_html`; lines without an owner
//! are skipped with a warning.

use crate::error::{HostingError, Result};
use crate::record::DomainRecord;
use crate::source::DomainSource;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, info, warn};
use vigil_core::DomainName;

/// Enumerates domains by invoking a host-management command.
pub struct CommandSource {
    program: String,
    args: Vec<String>,
    home_dir: PathBuf,
}

impl CommandSource {
    /// Create a source from a program and its arguments.
    #[must_use]
    pub fn new(
        program: impl Into<String>,
        args: Vec<String>,
        home_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            args,
            home_dir: home_dir.into(),
        }
    }

    /// Create a source from a configured command line (program followed by
    /// arguments).
    ///
    /// # Errors
    /// Returns [`HostingError::NoCommand`] when the command line is empty.
    pub fn from_command(command: &[String], home_dir: impl Into<PathBuf>) -> Result<Self> {
        let (program, args) = command.split_first().ok_or(HostingError::NoCommand)?;
        Ok(Self::new(program.clone(), args.to_vec(), home_dir))
    }

    /// Parse one output line into a record.
    ///
    /// Returns `None` for blank lines, comments and lines missing the
    /// owner field.
    fn parse_line(&self, line: &str) -> Option<DomainRecord> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let mut fields = line.split_whitespace();
        let raw_domain = fields.next()?;
        let Some(owner) = fields.next() else {
            warn!(line, "skipping domain line without an owner");
            return None;
        };

        let domain = match DomainName::new(raw_domain) {
            Ok(d) => d,
            Err(e) => {
                warn!(line, error = %e, "skipping malformed domain line");
                return None;
            }
        };

        let content_root = fields.next().map_or_else(
            || self.home_dir.join(owner).join("public_html"),
            PathBuf::from,
        );

        Some(DomainRecord::new(domain, owner, content_root))
    }
}

impl DomainSource for CommandSource {
    fn list_domains(&self) -> Result<Vec<DomainRecord>> {
        debug!(program = %self.program, "running host-management command");

        let output = Command::new(&self.program).args(&self.args).output()?;

        if !output.status.success() {
            return Err(HostingError::CommandFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let records: Vec<DomainRecord> = stdout
            .lines()
            .filter_map(|line| self.parse_line(line))
            .collect();

        info!(
            count = records.len(),
            program = %self.program,
            "enumerated hosted domains"
        );

        Ok(records)
    }
}
