//! Lumin packer: turns Lua source into one self-contained, minified file.
//!
//! Every stage is a function over token sequences produced by
//! [`lumin_lexer::tokenize`]:
//!
//! ```text
//! source
//!   │ tokenize
//!   ▼
//! Vec<Token> ──► remove_delete_blocks      (if PackOptions::delete_blocks)
//!            ──► remove_no_install_blocks
//!            ──► replace_build_blocks      (splices files, recursing into .lua)
//!            ──► Resolver::resolve         (pack only: inlines require calls)
//!            ──► strip
//!            ──► join ──► String
//! ```
//!
//! [`minify`] and [`pack`] compose the stages in that fixed order. The
//! individual stages are public so callers can compose their own order.
//!
//! # Modules
//!
//! - [`blocks`]: sentinel comment-block processors
//! - [`resolve`]: require resolution and inlining
//! - [`join`]: token stream serialization
//! - [`pipeline`]: the fixed `minify` / `pack` compositions

pub mod blocks;
mod error;
mod escape;
pub mod join;
mod loader;
mod options;
pub mod pipeline;
pub mod resolve;
mod strip;
mod wrapper;

pub use blocks::{remove_delete_blocks, remove_no_install_blocks, replace_build_blocks};
pub use error::PackError;
pub use escape::quote_lua_string;
pub use join::join;
pub use loader::{is_unopenable, normalize_path, DiskLoader, MemoryLoader, SourceLoader};
pub use options::PackOptions;
pub use pipeline::{minify, pack, pack_file, Context, Mode, Processed, Rendered};
pub use resolve::{MissingRequire, Resolver};
pub use strip::strip;

/// File extension of Lua sources, used for require targets and for
/// deciding whether a build-replace payload gets minified.
pub const LUA_EXTENSION: &str = "lua";
