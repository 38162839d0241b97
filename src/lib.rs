//! # argtree
//!
//! Parser and mutable tree for a small argument-token DSL.
//!
//! Text is a sequence of tokens separated by spaces or tabs. Each token is a
//! name followed by delimiter-tagged parameters, and tokens may be grouped in
//! nestable brackets:
//!
//! ```text
//! p-2.hover:md {text-lg.`a b` mt-1@print}
//! ```
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! syntax    → Arg, Node, structural edits, Selection view
//!   ↓
//! parser    → Node tokenizer, Arg tokenizer, parse entry points
//!   ↓
//! base      → GrammarConfig, Error, TextRange
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax)
// ============================================================================

/// Foundation types: GrammarConfig, Error, TextRange
pub mod base;

/// Parser: quote-aware tokenizers and tree construction
pub mod parser;

/// Syntax: Arg, Node and the edit algebra
pub mod syntax;

// Re-export the public surface
pub use base::{Error, GrammarConfig, NodeVariant, Result, TextRange, TextSize};
pub use parser::{parse, parse_one, parse_one_with, parse_with};
pub use syntax::{
    Arg, ArgId, Item, NameReplacer, Node, NodeKind, NodePath, Parameter, Pattern, Replacement,
    Replacer, Selection, Selector, concat,
};
