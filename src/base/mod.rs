//! Foundation types for argtree.
//!
//! This module provides the types every other module builds on:
//! - [`GrammarConfig`] - Markers and delimiters recognised by the tokenizers
//! - [`Error`], [`Result`] - Parse and edit failures
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//!
//! This module has NO dependencies on other argtree modules.

mod config;
mod error;

pub use config::{DEFAULT_DELIMITERS, GrammarConfig};
pub use error::{Error, NodeVariant, Result};

// Re-export text-size types for convenience
pub use text_size::{self, TextRange, TextSize};
