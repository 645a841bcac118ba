//! `lex`: dump the token stream of a file.

use std::fmt::Write as _;
use std::path::Path;

use lumin_lexer::{tokenize, Token};
use lumin_pack::{DiskLoader, SourceLoader};

use super::write_output;
use crate::CliError;

/// Print every token of the file at `path`, one per line.
pub fn lex_file(path: &Path) -> Result<(), CliError> {
    let source = DiskLoader.load_text(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let tokens = tokenize(&source).map_err(|source| CliError::Lex {
        path: path.to_path_buf(),
        source,
    })?;
    write_output(None, format_tokens(&tokens).as_bytes())
}

/// `<index>  <kind> "<text>"` per token, text in Rust debug quoting so
/// whitespace tokens stay visible.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (index, token) in tokens.iter().enumerate() {
        let _ = writeln!(out, "{index:>5}  {token}");
    }
    out
}
