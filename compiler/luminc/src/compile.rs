//! Host compiler delegation.
//!
//! `lumin compile` packs its input and hands the text to an external Lua
//! compiler. The compiler is a trait so tests (and embedders with an
//! in-process compiler) can substitute their own.

use std::io;
use std::process::Command;

use thiserror::Error;
use tracing::debug;

/// Program run by [`Luac::default`].
pub const DEFAULT_LUAC: &str = "luac";

/// Turns packed Lua text into a compiled chunk.
pub trait HostCompiler {
    fn compile(&self, source: &str) -> Result<Vec<u8>, CompileError>;
}

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("cannot create temporary files for the host compiler: {0}")]
    TempFile(#[source] io::Error),

    #[error("cannot run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' failed ({status}):\n{message}")]
    Failed {
        program: String,
        status: String,
        message: String,
    },

    #[error("'{program}' produced no output: {source}")]
    NoOutput {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// A `luac`-compatible compiler run as a child process.
///
/// Invoked as `<program> -s -o <output> <input>` on files in a private
/// temporary directory, which is removed afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Luac {
    program: String,
}

impl Luac {
    pub fn new(program: impl Into<String>) -> Self {
        Luac {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for Luac {
    fn default() -> Self {
        Luac::new(DEFAULT_LUAC)
    }
}

impl HostCompiler for Luac {
    fn compile(&self, source: &str) -> Result<Vec<u8>, CompileError> {
        let dir = tempfile::tempdir().map_err(CompileError::TempFile)?;
        let input = dir.path().join("input.lua");
        let output = dir.path().join("output.luac");
        std::fs::write(&input, source).map_err(CompileError::TempFile)?;

        debug!(program = %self.program, bytes = source.len(), "running host compiler");
        let result = Command::new(&self.program)
            .arg("-s")
            .arg("-o")
            .arg(&output)
            .arg(&input)
            .output()
            .map_err(|source| CompileError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !result.status.success() {
            return Err(CompileError::Failed {
                program: self.program.clone(),
                status: result.status.to_string(),
                message: String::from_utf8_lossy(&result.stderr).trim_end().to_string(),
            });
        }

        std::fs::read(&output).map_err(|source| CompileError::NoOutput {
            program: self.program.clone(),
            source,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;
