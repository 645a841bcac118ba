//! CLI error type.

use std::io;
use std::path::PathBuf;

use lumin_lexer::LexError;
use lumin_pack::PackError;
use thiserror::Error;

use crate::CompileError;

/// Anything that makes a command exit with status 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Pack(#[from] PackError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    /// Input of the `lex` command could not be read.
    #[error("{}", read_message(.path, .source))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input of the `lex` command failed to tokenize.
    #[error("{}: {source}", .path.display())]
    Lex {
        path: PathBuf,
        #[source]
        source: LexError,
    },

    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write to stdout: {0}")]
    Stdout(#[source] io::Error),
}

fn read_message(path: &std::path::Path, error: &io::Error) -> String {
    let path = path.display();
    match error.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {error}"),
    }
}
