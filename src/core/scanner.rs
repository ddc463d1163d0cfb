//! Character cursor over SSML input
//!
//! Positions are byte offsets into a `&str` and always sit on a char
//! boundary. Delimiter search uses memchr, which is safe on UTF-8 because the
//! delimiters are ASCII and never occur inside a multi-byte sequence.

use memchr::memchr;

/// Read position over the input text
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given input
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Scanner { input, pos: 0 }
    }

    /// Get the current position
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Check if we've reached the end
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Get remaining input
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Peek at current character without advancing
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Peek at the byte `offset` bytes past the current position
    #[inline]
    pub fn peek_byte_at(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + offset).copied()
    }

    /// Advance past the current character
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    /// Consume `expected` if it is the current character
    #[inline]
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Skip whitespace characters. Never fails, even at end of input.
    #[inline]
    pub fn skip_whitespace(&mut self) {
        let rest = self.remaining();
        let trimmed = rest.trim_start_matches(char::is_whitespace);
        self.pos += rest.len() - trimmed.len();
    }

    /// Check if input starts with `needle` at current position
    #[inline]
    pub fn starts_with(&self, needle: &str) -> bool {
        self.remaining().starts_with(needle)
    }

    /// Find next occurrence of a byte, as an absolute position
    #[inline]
    pub fn find_byte(&self, byte: u8) -> Option<usize> {
        memchr(byte, self.remaining().as_bytes()).map(|i| self.pos + i)
    }

    /// Consume characters while `pred` holds and return them
    pub fn read_while<F>(&mut self, mut pred: F) -> &'a str
    where
        F: FnMut(char) -> bool,
    {
        let start = self.pos;
        let rest = self.remaining();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(rest.len(), |(i, _)| i);
        self.pos += len;
        &self.input[start..self.pos]
    }

    /// Read up to (not including) the next `delimiter` byte
    ///
    /// Returns `None` and leaves the position untouched if the delimiter
    /// never appears.
    pub fn read_until(&mut self, delimiter: u8) -> Option<&'a str> {
        let end = self.find_byte(delimiter)?;
        let slice = &self.input[self.pos..end];
        self.pos = end;
        Some(slice)
    }
}
