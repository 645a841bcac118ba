//! Packer configuration.

use std::path::PathBuf;

/// Options shared by every stage of a `minify` / `pack` run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackOptions {
    /// Directory that require paths and build-replace paths are relative to.
    pub root: PathBuf,
    /// Remove `--[[minify-delete]]` blocks, from the input and from every
    /// inlined dependency.
    pub delete_blocks: bool,
    /// Embedded Lua files are minified but never require-packed. For build
    /// environments where the nested files' dependencies are unavailable.
    pub sandbox: bool,
}

impl Default for PackOptions {
    fn default() -> Self {
        PackOptions {
            root: PathBuf::from("."),
            delete_blocks: true,
            sandbox: false,
        }
    }
}

impl PackOptions {
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    #[must_use]
    pub fn with_delete_blocks(mut self, delete_blocks: bool) -> Self {
        self.delete_blocks = delete_blocks;
        self
    }

    #[must_use]
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }
}
