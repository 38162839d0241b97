//! Tokenizers and tree construction for the argument DSL
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Node tokenizer → leaf texts and bracketed sub-texts (recursing into groups)
//!     ↓
//! Arg tokenizer  → name + (delimiter, value) parameters per leaf
//!     ↓
//! Node tree      → groups of leaves, sharing one GrammarConfig
//! ```
//!
//! Both tokenizers are quote-aware: inside a quoted span, brackets,
//! delimiters and whitespace are ordinary characters.

mod arg_lexer;
mod builder;
mod cursor;
mod lexer;

pub use arg_lexer::tokenize_arg;
pub use builder::{parse, parse_one, parse_one_with, parse_with};
pub use lexer::{Token, TokenKind, tokenize};

pub(crate) use arg_lexer::is_plain_name;
pub(crate) use builder::build_group;
