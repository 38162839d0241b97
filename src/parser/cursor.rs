//! Byte cursor shared by both tokenizers.

use text_size::{TextRange, TextSize};

use crate::base::{Error, Result};

/// Forward-only cursor over a string slice.
///
/// Positions are byte indices into `text`; reported offsets add `base`, the
/// position of `text` inside the caller's original input.
pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    base: TextSize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str, base: TextSize) -> Self {
        Self { text, pos: 0, base }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub(crate) fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub(crate) fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(crate) fn at(&self, marker: &str) -> bool {
        self.rest().starts_with(marker)
    }

    /// Advance by `len` bytes. `len` must end on a char boundary.
    pub(crate) fn advance(&mut self, len: usize) {
        self.pos += len;
    }

    /// Advance past the current character.
    pub(crate) fn bump(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    pub(crate) fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        self.slice_from(start)
    }

    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.text[start..self.pos]
    }

    pub(crate) fn offset_of(&self, pos: usize) -> TextSize {
        self.base + TextSize::new(pos as u32)
    }

    pub(crate) fn range_from(&self, start: usize) -> TextRange {
        TextRange::new(self.offset_of(start), self.offset_of(self.pos))
    }

    /// Consume a quoted span starting at the cursor and return its interior.
    ///
    /// The cursor must be positioned on `open`. Nothing inside the span is
    /// interpreted; there is no escape for `close`.
    pub(crate) fn quoted(&mut self, open: &str, close: &str) -> Result<&'a str> {
        let start = self.pos;
        self.advance(open.len());
        let body = self.pos;
        loop {
            if self.at_end() {
                return Err(Error::UnterminatedQuote {
                    offset: self.offset_of(start),
                });
            }
            if self.at(close) {
                let interior = self.slice_from(body);
                self.advance(close.len());
                return Ok(interior);
            }
            self.bump();
        }
    }
}
