//! Trivia removal.
//!
//! The last stage before [`join`](crate::join): whitespace and comments are
//! dropped, leaving only tokens that affect how the program runs. Sentinel
//! comments must already have been processed by then.

use lumin_lexer::Token;

/// Drop every whitespace and comment token, keeping the rest in order.
pub fn strip(tokens: Vec<Token>) -> Vec<Token> {
    tokens.into_iter().filter(|t| !t.is_trivia()).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;
