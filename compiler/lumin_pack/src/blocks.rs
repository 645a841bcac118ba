//! Sentinel comment-block processors.
//!
//! All three passes walk the stream left to right, copying tokens through
//! until a sentinel comment switches them into skipping (or substituting)
//! mode, which lasts through the matching closing sentinel. Sentinels are
//! matched verbatim against whole comment tokens.
//!
//! | Sentinel pair | Effect |
//! |---|---|
//! | `--[[minify-delete]]` … `--[[/minify-delete]]` | removed; nesting is an error |
//! | `--[[no-install]]` … `--[[/no-install]]` | removed; first closer ends the block |
//! | `--[[build-replace=<path>]]` … `--[[/build-replace]]` | replaced with the quoted file |

use lumin_lexer::Token;
use tracing::{debug, warn};

use crate::escape::quote_lua_string;
use crate::loader::normalize_path;
use crate::pipeline::{self, Context, Mode};
use crate::{PackError, LUA_EXTENSION};

pub const DELETE_OPEN: &str = "--[[minify-delete]]";
pub const DELETE_CLOSE: &str = "--[[/minify-delete]]";
pub const NO_INSTALL_OPEN: &str = "--[[no-install]]";
pub const NO_INSTALL_CLOSE: &str = "--[[/no-install]]";
pub const BUILD_REPLACE_PREFIX: &str = "--[[build-replace=";
pub const BUILD_REPLACE_CLOSE: &str = "--[[/build-replace]]";

/// Remove every `--[[minify-delete]]` block, sentinels included.
///
/// An opener inside an open block is an error carrying the region's text
/// from the first opener through the second; nesting is never valid.
pub fn remove_delete_blocks(tokens: Vec<Token>) -> Result<Vec<Token>, PackError> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut region: Option<String> = None;

    for token in tokens {
        let Some(text) = region.as_mut() else {
            if token.is_comment(DELETE_OPEN) {
                region = Some(token.text);
            } else {
                out.push(token);
            }
            continue;
        };
        text.push_str(&token.text);
        if token.is_comment(DELETE_OPEN) {
            return Err(PackError::NestedDeleteBlock {
                region: std::mem::take(text),
            });
        }
        if token.is_comment(DELETE_CLOSE) {
            region = None;
        }
    }

    if region.is_some() {
        warn!("{DELETE_OPEN} block is never closed; removed through end of file");
    }
    Ok(out)
}

/// Remove every `--[[no-install]]` block, sentinels included.
///
/// No nesting check: an inner opener is skipped like any other token and
/// the first closer ends the block.
pub fn remove_no_install_blocks(tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut skipping = false;

    for token in tokens {
        if skipping {
            skipping = !token.is_comment(NO_INSTALL_CLOSE);
        } else if token.is_comment(NO_INSTALL_OPEN) {
            skipping = true;
        } else {
            out.push(token);
        }
    }

    if skipping {
        warn!("{NO_INSTALL_OPEN} block is never closed; removed through end of file");
    }
    out
}

/// The `<path>` of a `--[[build-replace=<path>]]` opener.
pub fn build_replace_target(token: &Token) -> Option<&str> {
    if token.kind != lumin_lexer::TokenKind::Comment {
        return None;
    }
    token
        .text
        .strip_prefix(BUILD_REPLACE_PREFIX)?
        .strip_suffix("]]")
        .filter(|path| !path.is_empty())
}

/// Replace every `--[[build-replace=<path>]]` block with the contents of
/// `<path>` as one double-quoted string token.
///
/// `.lua` files are first run through the pipeline in standalone mode
/// (packed, or only minified when [`PackOptions::sandbox`] is set). Any
/// other file is embedded byte for byte. A file that cannot be read is an
/// error: the block has no meaningful default.
///
/// [`PackOptions::sandbox`]: crate::PackOptions::sandbox
pub fn replace_build_blocks(tokens: Vec<Token>, ctx: &Context<'_>) -> Result<Vec<Token>, PackError> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut skipping = false;

    for token in tokens {
        if skipping {
            skipping = !token.is_comment(BUILD_REPLACE_CLOSE);
            continue;
        }
        let Some(target) = build_replace_target(&token) else {
            out.push(token);
            continue;
        };
        out.push(Token::string(embed_file(target, ctx)?));
        skipping = true;
    }

    if skipping {
        warn!("build-replace block is never closed; removed through end of file");
    }
    Ok(out)
}

/// Read `target` and render it as a quoted Lua string literal.
fn embed_file(target: &str, ctx: &Context<'_>) -> Result<String, PackError> {
    let path = normalize_path(&ctx.options.root.join(target));
    let is_lua = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(LUA_EXTENSION));

    let read_error = |source| PackError::MissingBuildReplace {
        path: path.clone(),
        source,
    };

    if !is_lua {
        let bytes = ctx.loader.load(&path).map_err(read_error)?;
        debug!(path = %path.display(), bytes = bytes.len(), "embedding file");
        return Ok(quote_lua_string(&bytes));
    }

    let source = ctx.loader.load_text(&path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::InvalidData {
            PackError::read(path.clone(), source)
        } else {
            read_error(source)
        }
    })?;
    let nested = ctx.nested(&path)?;
    let mode = if ctx.options.sandbox {
        Mode::Minify
    } else {
        Mode::Pack
    };
    debug!(path = %path.display(), ?mode, "embedding Lua file");
    let rendered = pipeline::run(&source, &path.display().to_string(), mode, &nested)?;
    Ok(quote_lua_string(rendered.text.as_bytes()))
}
