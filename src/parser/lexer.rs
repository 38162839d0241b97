//! Node tokenizer
//!
//! Splits a text blob into a flat list of leaf token texts and bracketed
//! sub-blobs. Bracketed sub-blobs are returned unparsed; the tree builder
//! recurses into them.

use text_size::{TextRange, TextSize};
use tracing::trace;

use super::cursor::Cursor;
use crate::base::{Error, GrammarConfig, Result};

/// Kind of a raw token produced by [`tokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Text of a single argument, e.g. `a.b.c`.
    Leaf,
    /// Interior of a bracketed group, without the outer brackets.
    Group,
}

/// A raw token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Range of `text` in the tokenized input.
    pub range: TextRange,
}

impl Token<'_> {
    pub fn is_bracketed(&self) -> bool {
        self.kind == TokenKind::Group
    }
}

/// Only space and tab separate tokens.
pub(crate) fn is_separator(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Tokenize an entire string into a Vec
pub fn tokenize<'a>(text: &'a str, config: &GrammarConfig) -> Result<Vec<Token<'a>>> {
    config.validate()?;
    tokenize_at(text, config, TextSize::new(0))
}

/// Tokenize `text`, reporting positions relative to `base`.
pub(crate) fn tokenize_at<'a>(
    text: &'a str,
    config: &GrammarConfig,
    base: TextSize,
) -> Result<Vec<Token<'a>>> {
    let leading = text.len() - text.trim_start().len();
    let body = text.trim();
    let mut cursor = Cursor::new(body, base + TextSize::new(leading as u32));
    let mut tokens = Vec::new();

    while !cursor.at_end() {
        let token = if cursor.at(&config.bracket_open) {
            group(&mut cursor, config)?
        } else {
            leaf(&mut cursor, config)?
        };
        trace!(kind = ?token.kind, range = ?token.range, "token");
        tokens.push(token);
        cursor.eat_while(is_separator);
    }

    Ok(tokens)
}

fn group<'a>(cursor: &mut Cursor<'a>, config: &GrammarConfig) -> Result<Token<'a>> {
    let open_at = cursor.pos();
    cursor.advance(config.bracket_open.len());
    let start = cursor.pos();
    let mut depth = 1usize;

    while !cursor.at_end() {
        if cursor.at(&config.bracket_close) {
            depth -= 1;
            if depth == 0 {
                let token = Token {
                    kind: TokenKind::Group,
                    text: cursor.slice_from(start),
                    range: cursor.range_from(start),
                };
                cursor.advance(config.bracket_close.len());
                return Ok(token);
            }
            cursor.advance(config.bracket_close.len());
        } else if cursor.at(&config.bracket_open) {
            depth += 1;
            trace!(depth, "nested group");
            cursor.advance(config.bracket_open.len());
        } else if cursor.at(&config.quote_open) {
            cursor.quoted(&config.quote_open, &config.quote_close)?;
        } else {
            cursor.bump();
        }
    }

    Err(Error::UnterminatedGroup {
        offset: cursor.offset_of(open_at),
    })
}

fn leaf<'a>(cursor: &mut Cursor<'a>, config: &GrammarConfig) -> Result<Token<'a>> {
    let start = cursor.pos();
    while let Some(c) = cursor.current() {
        if cursor.at(&config.quote_open) {
            cursor.quoted(&config.quote_open, &config.quote_close)?;
        } else if is_separator(c) {
            break;
        } else {
            cursor.bump();
        }
    }
    Ok(Token {
        kind: TokenKind::Leaf,
        text: cursor.slice_from(start),
        range: cursor.range_from(start),
    })
}
