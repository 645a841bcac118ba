//! Byte cursor over Lua source text.
//!
//! The cursor advances through the source byte-by-byte. Reads past the end
//! return `0x00`, which no scanning predicate accepts, so loops built on
//! [`Cursor::eat_while`] terminate at EOF without extra bounds checks.
//!
//! Long searches (string terminators, long-bracket closers, end of line)
//! go through `memchr` instead of byte loops.

/// Cursor over a source string.
///
/// The cursor is [`Copy`], enabling cheap state snapshots for backtracking
/// (the long-bracket lookahead uses this).
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.source.as_bytes().get(index).copied().unwrap_or(0)
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance the cursor by `n` bytes, clamped to the end of the source.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The unconsumed remainder of the source.
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Extract the source text from `start` to the current position.
    ///
    /// `start` must come from an earlier [`pos()`](Self::pos) call, so it
    /// always falls on a character boundary.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }

    /// The full character starting at the current position, if any.
    pub fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// `pred(0)` must return `false`, otherwise the loop stops only at EOF.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` byte, or to EOF if there is none.
    ///
    /// The newline itself is not consumed.
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = self.rest().as_bytes();
        match memchr::memchr(b'\n', remaining) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }

    /// Byte offset of the next occurrence of `needle` at or after the
    /// current position, without moving the cursor.
    pub fn find_byte(&self, needle: u8) -> Option<usize> {
        memchr::memchr(needle, self.rest().as_bytes()).map(|offset| self.pos + offset)
    }

    /// Byte offset of the next occurrence of `needle` at or after the
    /// current position, without moving the cursor.
    pub fn find_str(&self, needle: &str) -> Option<usize> {
        memchr::memmem::find(self.rest().as_bytes(), needle.as_bytes())
            .map(|offset| self.pos + offset)
    }

    /// Number of consecutive `\` bytes ending immediately before `index`.
    pub fn backslashes_before(&self, index: usize) -> usize {
        self.source.as_bytes()[..index]
            .iter()
            .rev()
            .take_while(|&&b| b == b'\\')
            .count()
    }

    /// Move the cursor to an absolute byte offset, clamped to EOF.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.source.len());
    }
}
