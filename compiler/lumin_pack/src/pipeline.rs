//! Fixed stage compositions.
//!
//! ```text
//! minify: tokenize → delete blocks? → no-install → build-replace → strip → join
//! pack:   tokenize → delete blocks? → no-install → build-replace → resolve → strip → join
//! ```
//!
//! Each call builds its own [`Resolver`], so dependency caches never leak
//! between runs, including the nested runs started by build-replace.

use std::path::Path;

use lumin_lexer::{tokenize, Token};
use tracing::debug;

use crate::blocks::{remove_delete_blocks, remove_no_install_blocks, replace_build_blocks};
use crate::loader::SourceLoader;
use crate::resolve::{MissingRequire, Resolver};
use crate::{join, strip, PackError, PackOptions};

/// Maximum nesting of build-replace files embedding Lua files.
pub const MAX_EMBED_DEPTH: usize = 16;

/// Which composition to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Strip and rejoin; `require` calls are left alone.
    Minify,
    /// Minify and inline every literal `require`.
    Pack,
}

/// Tokens after every stage before strip/join.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Processed {
    pub tokens: Vec<Token>,
    /// Literal requires left in place because their file could not be
    /// opened. Always empty in [`Mode::Minify`].
    pub missing: Vec<MissingRequire>,
}

/// Final output of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub missing: Vec<MissingRequire>,
}

impl Rendered {
    /// `true` if every literal require was inlined.
    pub fn is_self_contained(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Shared inputs for one pipeline run.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub options: &'a PackOptions,
    pub loader: &'a dyn SourceLoader,
    depth: usize,
}

impl<'a> Context<'a> {
    pub fn new(options: &'a PackOptions, loader: &'a dyn SourceLoader) -> Self {
        Context {
            options,
            loader,
            depth: 0,
        }
    }

    /// Build-replace nesting level of this run (0 for the top level).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Context for a run embedded at `path`, one level deeper.
    pub(crate) fn nested(&self, path: &Path) -> Result<Self, PackError> {
        if self.depth >= MAX_EMBED_DEPTH {
            return Err(PackError::EmbedTooDeep {
                path: path.to_path_buf(),
                depth: MAX_EMBED_DEPTH,
            });
        }
        Ok(Context {
            depth: self.depth + 1,
            ..*self
        })
    }
}

/// Minify `source`: drop whitespace and comments, process comment blocks.
pub fn minify(
    source: &str,
    options: &PackOptions,
    loader: &dyn SourceLoader,
) -> Result<String, PackError> {
    run(source, "<input>", Mode::Minify, &Context::new(options, loader)).map(|r| r.text)
}

/// Pack `source`: minify and inline every literal `require`.
pub fn pack(
    source: &str,
    options: &PackOptions,
    loader: &dyn SourceLoader,
) -> Result<String, PackError> {
    run(source, "<input>", Mode::Pack, &Context::new(options, loader)).map(|r| r.text)
}

/// Read `path` through `loader` and run `mode` on it.
///
/// Unlike [`minify`] and [`pack`], the result also carries the requires
/// that could not be inlined.
pub fn pack_file(
    path: &Path,
    mode: Mode,
    options: &PackOptions,
    loader: &dyn SourceLoader,
) -> Result<Rendered, PackError> {
    let source = loader
        .load_text(path)
        .map_err(|source| PackError::read(path, source))?;
    run(
        &source,
        &path.display().to_string(),
        mode,
        &Context::new(options, loader),
    )
}

/// Run `mode` on `source`. `origin` names the source in lexer errors.
pub fn run(
    source: &str,
    origin: &str,
    mode: Mode,
    ctx: &Context<'_>,
) -> Result<Rendered, PackError> {
    let Processed { tokens, missing } = process(source, origin, mode, ctx)?;
    Ok(Rendered {
        text: join(&strip(tokens)),
        missing,
    })
}

/// Every stage before strip/join. Trivia is still present in the result.
pub fn process(
    source: &str,
    origin: &str,
    mode: Mode,
    ctx: &Context<'_>,
) -> Result<Processed, PackError> {
    let mut tokens = tokenize(source).map_err(|e| PackError::lex(origin, e))?;
    debug!(origin, tokens = tokens.len(), depth = ctx.depth, "tokenized");

    if ctx.options.delete_blocks {
        tokens = remove_delete_blocks(tokens)?;
    }
    tokens = remove_no_install_blocks(tokens);
    tokens = replace_build_blocks(tokens, ctx)?;

    if mode == Mode::Minify {
        return Ok(Processed {
            tokens,
            missing: Vec::new(),
        });
    }

    let mut resolver = Resolver::new(ctx.options, ctx.loader);
    let tokens = resolver.resolve(tokens)?;
    Ok(Processed {
        tokens,
        missing: resolver.into_missing(),
    })
}
