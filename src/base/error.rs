//! Error types for parsing and editing argument trees.

use std::fmt;

use text_size::TextSize;
use thiserror::Error;

/// Result alias used throughout argtree.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The two shapes a [`Node`](crate::Node) can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeVariant {
    /// A node wrapping exactly one argument.
    Leaf,
    /// A node holding an ordered list of children.
    Group,
}

impl NodeVariant {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Leaf => "leaf",
            Self::Group => "group",
        }
    }
}

impl fmt::Display for NodeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while tokenizing text or editing a tree.
///
/// Offsets are byte offsets into the text handed to the public entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A bracketed group is still open when the input ends.
    #[error("group opened at offset {offset:?} is never closed")]
    UnterminatedGroup { offset: TextSize },

    /// A quoted span is still open when the input ends.
    #[error("quoted text opened at offset {offset:?} is never closed")]
    UnterminatedQuote { offset: TextSize },

    /// Input is left over after a name or parameter and no delimiter matches.
    #[error("expected a parameter delimiter at offset {offset:?} in `{text}`")]
    MissingDelimiter { offset: TextSize, text: String },

    /// [`Arg::one`](crate::Arg::one) found more than one value.
    #[error("`{arg}` has multiple values for `{delimiter}`")]
    MultipleValues { arg: String, delimiter: String },

    /// A leaf was used where a group is required, or the reverse.
    #[error("expected a {expected} node, found a {found} node")]
    WrongVariant {
        expected: NodeVariant,
        found: NodeVariant,
    },

    /// A group with no children cannot be split.
    #[error("cannot split a group without children")]
    EmptyGroup,

    /// The grammar cannot be used for tokenizing.
    #[error("invalid grammar: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Create a wrong-variant error for a node of kind `found`.
    pub fn wrong_variant(expected: NodeVariant, found: NodeVariant) -> Self {
        Self::WrongVariant { expected, found }
    }

    /// Byte offset of the failure in the source text, for syntax errors.
    pub fn offset(&self) -> Option<TextSize> {
        match self {
            Self::UnterminatedGroup { offset }
            | Self::UnterminatedQuote { offset }
            | Self::MissingDelimiter { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// Whether this error was raised while tokenizing text.
    pub fn is_syntax_error(&self) -> bool {
        self.offset().is_some()
    }
}
