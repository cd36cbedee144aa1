//! Vigil Keywords - keyword list loading and match primitives.
//!
//! Keywords are the tokens the scanner hunts for in domain names and page
//! content. Each [`Keyword`] keeps its original display form alongside a
//! case-folded form, a precompiled whole-word pattern and its 3-character
//! windows for fuzzy matching. [`KeywordLoader`] reads them from a plain
//! text file, one keyword per line, with `#` comments.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod keyword;
pub mod loader;

pub use error::{KeywordError, Result};
pub use keyword::Keyword;
pub use loader::KeywordLoader;
