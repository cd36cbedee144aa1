//! Vigil Hosting - domain enumeration for shared web servers.
//!
//! This crate answers one question: which domains does this server host,
//! and who owns each one? The answer comes from one of two pluggable
//! strategies behind the [`DomainSource`] trait:
//!
//! - [`LocaldomainsSource`] reads the server-wide localdomains file and
//!   resolves each domain's owner from control-panel filesystem conventions.
//! - [`CommandSource`] invokes a host-management command that prints the
//!   domain list itself.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod command;
pub mod error;
pub mod localdomains;
pub mod record;
pub mod source;

pub use command::CommandSource;
pub use error::{HostingError, Result};
pub use localdomains::LocaldomainsSource;
pub use record::DomainRecord;
pub use source::{source_from_config, DomainSource};
