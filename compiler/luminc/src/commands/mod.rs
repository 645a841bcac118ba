//! Command handlers for the `lumin` binary.
//!
//! Each handler returns a [`CliError`] instead of exiting, so `main` owns
//! the single `error: ...` / exit-status path. Output is produced in full
//! before anything is written: a failing run leaves no partial file behind.

use std::io::Write;
use std::path::Path;

use crate::CliError;

mod lex;
mod options;
mod pack;

pub use lex::{format_tokens, lex_file};
pub use options::{parse_options, CliOptions};
pub use pack::{compile_file, minify_file, pack_file, render};

/// Write `bytes` to `output`, or to stdout when no path was given.
pub(crate) fn write_output(output: Option<&Path>, bytes: &[u8]) -> Result<(), CliError> {
    match output {
        Some(path) => std::fs::write(path, bytes).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(bytes)
                .and_then(|()| stdout.flush())
                .map_err(CliError::Stdout)
        }
    }
}
