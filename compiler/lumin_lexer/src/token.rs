//! Token types.

use std::fmt;

/// Classification of a token.
///
/// Deliberately coarse: later stages only need to tell trivia from code,
/// find words that must not fuse, and match `require` calls.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of whitespace, newlines included.
    Space,
    /// Line comment, block comment, or a leading shebang line.
    Comment,
    /// Quoted or long-bracket string literal, delimiters included.
    String,
    /// Identifier, keyword, or numeric run (`[A-Za-z0-9_]+`).
    Word,
    LParen,
    RParen,
    /// Any other single ASCII punctuation character.
    Symbol,
}

impl TokenKind {
    /// Whitespace and comments: tokens the stripper drops.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Space | TokenKind::Comment)
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Space => "space",
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::Word => "word",
            TokenKind::LParen => "lparen",
            TokenKind::RParen => "rparen",
            TokenKind::Symbol => "symbol",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified fragment of source text.
///
/// Tokens own their text so later stages can splice in synthetic tokens
/// (generated wrappers, embedded file contents) alongside lexed ones.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    pub fn word(text: impl Into<String>) -> Self {
        Token::new(TokenKind::Word, text)
    }

    pub fn string(text: impl Into<String>) -> Self {
        Token::new(TokenKind::String, text)
    }

    pub fn lparen() -> Self {
        Token::new(TokenKind::LParen, "(")
    }

    pub fn rparen() -> Self {
        Token::new(TokenKind::RParen, ")")
    }

    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    /// `true` if this is a word token spelled exactly `text`.
    pub fn is_word(&self, text: &str) -> bool {
        self.kind == TokenKind::Word && self.text == text
    }

    /// `true` if this is a comment token spelled exactly `text`.
    pub fn is_comment(&self, text: &str) -> bool {
        self.kind == TokenKind::Comment && self.text == text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.text)
    }
}
