//! Hand-written scanner producing one [`Token`] at a time.
//!
//! # Design
//!
//! Main dispatch switches on the current byte. Each arm calls a focused
//! method that advances the cursor and returns the [`TokenKind`]; the token
//! text is then sliced from the start position. Rule priority is encoded in
//! the order of the arms:
//!
//! 1. whitespace run
//! 2. shebang line (offset 0 only)
//! 3. block comment `--[[ ... ]]`, 4. line comment `-- ...`
//! 5. block string `[[ ... ]]`
//! 6. double-quoted string, 7. single-quoted string
//! 8. identifier / keyword / number run
//! 9. `(`, 10. `)`
//! 11. any other ASCII punctuation character
//!
//! Long brackets may carry a level (`[==[ ... ]==]`); the closer must use
//! the same number of `=` signs.

use crate::cursor::Cursor;
use crate::lex_error::LexError;
use crate::token::{Token, TokenKind};

/// Scanner over a single source string.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Produce the next token, `Ok(None)` once the source is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        if self.cursor.is_eof() {
            return Ok(None);
        }
        let start = self.cursor.pos();
        let kind = match self.cursor.current() {
            b' ' | b'\t' | b'\r' | b'\n' | 0x0B | 0x0C => self.whitespace(),
            b'#' if start == 0 && self.cursor.peek() == b'!' => self.shebang(),
            b'-' if self.cursor.peek() == b'-' => self.comment(start)?,
            b'[' => self.bracket(start)?,
            quote @ (b'"' | b'\'') => self.quoted_string(start, quote)?,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' => self.word(),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b if b.is_ascii_punctuation() => self.single(TokenKind::Symbol),
            _ => return Err(self.unexpected(start)),
        };
        Ok(Some(Token::new(kind, self.cursor.slice_from(start))))
    }

    // ─── Trivia ────────────────────────────────────────────────────

    fn whitespace(&mut self) -> TokenKind {
        self.cursor
            .eat_while(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n' | 0x0B | 0x0C));
        TokenKind::Space
    }

    fn shebang(&mut self) -> TokenKind {
        self.cursor.eat_until_newline_or_eof();
        TokenKind::Comment
    }

    fn comment(&mut self, start: usize) -> Result<TokenKind, LexError> {
        self.cursor.advance_n(2); // consume "--"
        if let Some(level) = self.long_bracket_level() {
            if self.close_long_bracket(level) {
                return Ok(TokenKind::Comment);
            }
            return Err(LexError::UnterminatedComment { position: start });
        }
        self.cursor.eat_until_newline_or_eof();
        Ok(TokenKind::Comment)
    }

    // ─── Strings ───────────────────────────────────────────────────

    fn bracket(&mut self, start: usize) -> Result<TokenKind, LexError> {
        let Some(level) = self.long_bracket_level() else {
            return Ok(self.single(TokenKind::Symbol));
        };
        if self.close_long_bracket(level) {
            Ok(TokenKind::String)
        } else {
            Err(LexError::UnterminatedString { position: start })
        }
    }

    /// Scan a `"` or `'` string.
    ///
    /// Finds the next occurrence of the quote and counts the backslashes
    /// immediately before it. An odd count escapes the quote and the search
    /// resumes past it; an even count (zero included) terminates the string.
    fn quoted_string(&mut self, start: usize, quote: u8) -> Result<TokenKind, LexError> {
        self.cursor.advance(); // consume opening quote
        loop {
            let Some(end) = self.cursor.find_byte(quote) else {
                return Err(LexError::UnterminatedString { position: start });
            };
            self.cursor.seek(end + 1);
            if self.cursor.backslashes_before(end) % 2 == 0 {
                return Ok(TokenKind::String);
            }
        }
    }

    /// If the cursor sits on a long-bracket opener (`[`, zero or more `=`,
    /// `[`), consume it and return its level. Otherwise leave the cursor
    /// untouched.
    fn long_bracket_level(&mut self) -> Option<usize> {
        let mut lookahead = self.cursor;
        if lookahead.current() != b'[' {
            return None;
        }
        lookahead.advance();
        let level_start = lookahead.pos();
        lookahead.eat_while(|b| b == b'=');
        let level = lookahead.pos() - level_start;
        if lookahead.current() != b'[' {
            return None;
        }
        lookahead.advance();
        self.cursor = lookahead;
        Some(level)
    }

    /// Consume through the closer matching a long bracket of `level`.
    /// Returns `false` (cursor at EOF) if there is none.
    fn close_long_bracket(&mut self, level: usize) -> bool {
        let closer = format!("]{}]", "=".repeat(level));
        match self.cursor.find_str(&closer) {
            Some(end) => {
                self.cursor.seek(end + closer.len());
                true
            }
            None => {
                self.cursor.seek(usize::MAX);
                false
            }
        }
    }

    // ─── Words & Punctuation ───────────────────────────────────────

    fn word(&mut self) -> TokenKind {
        self.cursor
            .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        TokenKind::Word
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    #[cold]
    fn unexpected(&self, start: usize) -> LexError {
        LexError::UnexpectedCharacter {
            character: self.cursor.current_char().unwrap_or('\0'),
            position: start,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;
