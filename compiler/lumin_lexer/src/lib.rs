//! Lossless tokenizer for Lua source.
//!
//! Splits source text into an ordered sequence of classified [`Token`]s
//! without discarding anything: whitespace and comments are tokens too, so
//! concatenating every token's text reproduces the input byte for byte.
//!
//! The lexer only knows enough Lua to find token boundaries. It does not
//! resolve keywords, validate escapes, or parse numbers. Numbers lex as
//! [`TokenKind::Word`] runs, and `1.5` is three tokens (`1`, `.`, `5`).
//!
//! # Architecture
//!
//! ```text
//! &str ──► Cursor ──► Scanner::next_token() ──► Token { kind, text }
//! ```
//!
//! [`tokenize`] drives the scanner to completion and stops at the first
//! [`LexError`].

mod cursor;
mod lex_error;
mod scanner;
mod token;

pub use cursor::Cursor;
pub use lex_error::LexError;
pub use scanner::Scanner;
pub use token::{Token, TokenKind};

/// Tokenize a complete Lua source string.
///
/// Consumes all of `source` or fails with the first lexical error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = scanner.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}
