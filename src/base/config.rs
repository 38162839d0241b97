//! Grammar configuration
//!
//! A [`GrammarConfig`] is an immutable description of the markers the
//! tokenizers recognise. It is shared between every [`Arg`](crate::Arg) and
//! [`Node`](crate::Node) of a tree through an `Arc`.

use smol_str::SmolStr;

use super::error::{Error, Result};

/// Delimiters used when no grammar is supplied, in priority order.
pub const DEFAULT_DELIMITERS: [&str; 3] = [".", ":", "@"];

/// Markers and delimiters of the argument DSL.
///
/// Delimiters are tried in list order wherever a prefix match is required;
/// the order decides ties, not the length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct GrammarConfig {
    /// Opens a bracketed group of tokens.
    pub bracket_open: SmolStr,
    /// Closes a bracketed group of tokens.
    pub bracket_close: SmolStr,
    /// Opens a verbatim quoted span.
    pub quote_open: SmolStr,
    /// Closes a verbatim quoted span.
    pub quote_close: SmolStr,
    /// Parameter delimiters, highest priority first.
    pub delimiters: Vec<SmolStr>,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            bracket_open: SmolStr::new_static("{"),
            bracket_close: SmolStr::new_static("}"),
            quote_open: SmolStr::new_static("`"),
            quote_close: SmolStr::new_static("`"),
            delimiters: DEFAULT_DELIMITERS.iter().copied().map(SmolStr::new_static).collect(),
        }
    }
}

impl GrammarConfig {
    /// Replace the group markers.
    pub fn with_brackets(mut self, open: impl Into<SmolStr>, close: impl Into<SmolStr>) -> Self {
        self.bracket_open = open.into();
        self.bracket_close = close.into();
        self
    }

    /// Replace the quote markers.
    pub fn with_quotes(mut self, open: impl Into<SmolStr>, close: impl Into<SmolStr>) -> Self {
        self.quote_open = open.into();
        self.quote_close = close.into();
        self
    }

    /// Replace the delimiter list. The iteration order becomes the priority order.
    pub fn with_delimiters<I, D>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<SmolStr>,
    {
        self.delimiters = delimiters.into_iter().map(Into::into).collect();
        self
    }

    /// Check that every marker is usable by the tokenizers.
    ///
    /// An empty marker would match at every position, so the tokenizers
    /// would never make progress.
    pub fn validate(&self) -> Result<()> {
        let markers = [
            ("bracket open", &self.bracket_open),
            ("bracket close", &self.bracket_close),
            ("quote open", &self.quote_open),
            ("quote close", &self.quote_close),
        ];
        for (what, marker) in markers {
            if marker.is_empty() {
                return Err(Error::InvalidConfig(format!("{what} marker is empty")));
            }
        }
        if self.delimiters.is_empty() {
            return Err(Error::InvalidConfig("no delimiters configured".to_string()));
        }
        if self.delimiters.iter().any(SmolStr::is_empty) {
            return Err(Error::InvalidConfig("empty delimiter".to_string()));
        }
        Ok(())
    }

    /// Whether `delimiter` is one of the configured delimiters.
    pub fn is_delimiter(&self, delimiter: &str) -> bool {
        self.delimiters.iter().any(|d| d == delimiter)
    }

    /// The first delimiter, in priority order, that `text` starts with.
    pub fn delimiter_at(&self, text: &str) -> Option<&SmolStr> {
        self.delimiters.iter().find(|d| text.starts_with(d.as_str()))
    }

    /// Whether any configured delimiter occurs anywhere in `text`.
    pub fn contains_delimiter(&self, text: &str) -> bool {
        self.delimiters.iter().any(|d| text.contains(d.as_str()))
    }
}
