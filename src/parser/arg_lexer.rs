//! Argument tokenizer
//!
//! Splits the text of one token into a name and an ordered list of
//! delimiter-tagged parameters:
//!
//! ```text
//! name (delimiter value)*
//! ```
//!
//! A name is either quoted or the longest run of ASCII alphanumerics and
//! hyphens (possibly empty). A value is either quoted or runs up to the next
//! position where any delimiter matches.

use std::sync::Arc;

use text_size::TextSize;

use super::cursor::Cursor;
use crate::base::{Error, GrammarConfig, Result};
use crate::syntax::{Arg, Parameter};

/// Characters allowed in an unquoted name.
pub(crate) fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Whether `name` can be written without quotes.
pub(crate) fn is_plain_name(name: &str) -> bool {
    name.chars().all(is_name_char)
}

/// Tokenize the text of a single argument.
pub fn tokenize_arg(text: &str, config: &Arc<GrammarConfig>) -> Result<Arg> {
    config.validate()?;
    tokenize_arg_at(text, config, TextSize::new(0))
}

pub(crate) fn tokenize_arg_at(
    text: &str,
    config: &Arc<GrammarConfig>,
    base: TextSize,
) -> Result<Arg> {
    let mut cursor = Cursor::new(text, base);

    let name = if cursor.at(&config.quote_open) {
        cursor.quoted(&config.quote_open, &config.quote_close)?
    } else {
        cursor.eat_while(is_name_char)
    };

    let mut parameters = Vec::new();
    while !cursor.at_end() {
        let Some(delimiter) = config.delimiter_at(cursor.rest()) else {
            return Err(Error::MissingDelimiter {
                offset: cursor.offset_of(cursor.pos()),
                text: text.to_string(),
            });
        };
        cursor.advance(delimiter.len());

        let value = if cursor.at(&config.quote_open) {
            cursor.quoted(&config.quote_open, &config.quote_close)?
        } else {
            let start = cursor.pos();
            while !cursor.at_end() && config.delimiter_at(cursor.rest()).is_none() {
                cursor.bump();
            }
            cursor.slice_from(start)
        };
        parameters.push(Parameter::new(delimiter.clone(), value));
    }

    Ok(Arg::with_parameters(name, parameters, Arc::clone(config)))
}
