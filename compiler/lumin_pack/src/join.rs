//! Token stream serialization.
//!
//! The joiner is the inverse of the lexer for unstripped streams, and the
//! minimal safe serialization for stripped ones: two adjacent word tokens
//! get one space between them, and nothing else ever does.

use lumin_lexer::{Token, TokenKind};
use tracing::trace;

/// Size of one output chunk before it is sealed.
const CHUNK_SIZE: usize = 64 * 1024;

/// Number of progress reports over a full join.
const PROGRESS_STEPS: usize = 10;

/// Chunked string builder.
///
/// Output is accumulated in fixed-size chunks and concatenated once at the
/// end, so large outputs are not reallocated and copied as they grow.
#[derive(Default)]
pub struct ChunkEmitter {
    chunks: Vec<String>,
    current: String,
}

impl ChunkEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a text fragment.
    pub fn emit(&mut self, text: &str) {
        if self.current.len() + text.len() > CHUNK_SIZE && !self.current.is_empty() {
            let sealed = std::mem::replace(&mut self.current, String::with_capacity(CHUNK_SIZE));
            self.chunks.push(sealed);
        }
        self.current.push_str(text);
    }

    /// Emit a single space.
    pub fn emit_space(&mut self) {
        self.emit(" ");
    }

    /// Total bytes emitted so far.
    pub fn len(&self) -> usize {
        self.chunks.iter().map(String::len).sum::<usize>() + self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Concatenate every chunk into the final output.
    pub fn output(self) -> String {
        let mut out = String::with_capacity(self.len());
        for chunk in &self.chunks {
            out.push_str(chunk);
        }
        out.push_str(&self.current);
        out
    }
}

/// Serialize tokens back to text.
///
/// A single ASCII space is inserted between two consecutive [`TokenKind::Word`]
/// tokens so that `return x` never becomes `returnx`. All other pairs are
/// concatenated as-is. Progress percentages are reported at `trace` level.
pub fn join(tokens: &[Token]) -> String {
    let mut emitter = ChunkEmitter::new();
    let total = tokens.len();
    let step = (total / PROGRESS_STEPS).max(1);
    let mut previous: Option<TokenKind> = None;

    for (index, token) in tokens.iter().enumerate() {
        if previous == Some(TokenKind::Word) && token.kind == TokenKind::Word {
            emitter.emit_space();
        }
        emitter.emit(&token.text);
        previous = Some(token.kind);

        let done = index + 1;
        if done % step == 0 {
            trace!(percent = done * 100 / total, "joining tokens");
        }
    }

    emitter.output()
}
