//! Packer error type.

use std::io;
use std::path::PathBuf;

use lumin_lexer::LexError;
use thiserror::Error;

/// Everything that can abort a `minify` / `pack` run.
///
/// Missing require targets are not here: they degrade to a warning and the
/// call is left in place (see [`crate::MissingRequire`]).
#[derive(Debug, Error)]
pub enum PackError {
    /// A source (the input, a dependency, or an embedded Lua file) failed
    /// to tokenize.
    #[error("{origin}: {source}")]
    Lex {
        origin: String,
        #[source]
        source: LexError,
    },

    /// A `--[[minify-delete]]` opener inside another delete block.
    #[error("nested --[[minify-delete]] block:\n{region}")]
    NestedDeleteBlock { region: String },

    /// The file named by `--[[build-replace=<path>]]` could not be read.
    #[error("cannot read build-replace file '{}': {source}", .path.display())]
    MissingBuildReplace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Build-replace files embedding each other past the depth limit.
    #[error("build-replace nesting deeper than {depth} levels at '{}'", .path.display())]
    EmbedTooDeep { path: PathBuf, depth: usize },

    /// A dependency requires itself, directly or transitively.
    #[error("cyclic require: {}", format_chain(.chain))]
    CyclicRequire { chain: Vec<PathBuf> },

    /// A Lua source (the input, a dependency, or an embedded Lua file)
    /// was read but is not valid UTF-8.
    #[error("'{}' is not valid UTF-8: {source}", .path.display())]
    InvalidEncoding {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A Lua source could not be read for a reason other than being absent
    /// or unreadable by permission.
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PackError {
    #[cold]
    pub(crate) fn lex(origin: impl Into<String>, source: LexError) -> Self {
        PackError::Lex {
            origin: origin.into(),
            source,
        }
    }

    /// Classify a failed [`SourceLoader::load_text`] of a Lua source.
    ///
    /// [`SourceLoader::load_text`]: crate::SourceLoader::load_text
    #[cold]
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::InvalidData {
            PackError::InvalidEncoding { path, source }
        } else {
            PackError::Io { path, source }
        }
    }
}

fn format_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
