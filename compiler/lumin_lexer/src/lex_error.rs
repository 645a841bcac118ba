//! Lexer error types.
//!
//! Positions are byte offsets of the start of the offending token. They are
//! token granular on purpose: diagnostics name the place the scanner gave
//! up, not a line and column.

use thiserror::Error;

/// A lexical error. Fatal to the `tokenize` call that produced it.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexError {
    /// End of input reached while looking for a string's closing delimiter.
    #[error("unterminated string starting at byte {position}")]
    UnterminatedString { position: usize },

    /// End of input reached inside a `--[[ ... ]]` block comment.
    #[error("unterminated block comment starting at byte {position}")]
    UnterminatedComment { position: usize },

    /// A character no token rule accepts (control characters, non-ASCII
    /// outside strings and comments).
    #[error("unexpected character {character:?} at byte {position}")]
    UnexpectedCharacter { character: char, position: usize },
}

impl LexError {
    /// Byte offset where the offending token starts.
    pub fn position(&self) -> usize {
        match self {
            LexError::UnterminatedString { position }
            | LexError::UnterminatedComment { position }
            | LexError::UnexpectedCharacter { position, .. } => *position,
        }
    }
}
