//! Filesystem seam.
//!
//! The resolver and the build-replace processor read files only through
//! [`SourceLoader`], so tests and embedders can serve sources from memory.

use std::io;
use std::path::{Component, Path, PathBuf};

use rustc_hash::FxHashMap;

/// Reads source files by path.
pub trait SourceLoader {
    /// Read the full contents of `path`.
    fn load(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Read `path` as UTF-8 text.
    ///
    /// Invalid UTF-8 is reported as [`io::ErrorKind::InvalidData`].
    fn load_text(&self, path: &Path) -> io::Result<String> {
        let bytes = self.load(path)?;
        String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// `true` if a load failed because the file is absent or not readable by
/// this process, as opposed to present with unusable contents.
pub fn is_unopenable(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied
    )
}

/// Loader backed by the real filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiskLoader;

impl SourceLoader for DiskLoader {
    fn load(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// Loader serving files from an in-memory map.
///
/// Paths are normalized on insert and on lookup, so `./a/b.lua` and
/// `a/b.lua` name the same file.
#[derive(Clone, Debug, Default)]
pub struct MemoryLoader {
    files: FxHashMap<PathBuf, Vec<u8>>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a file.
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents);
        self
    }

    /// Add (or replace) a file.
    pub fn insert(&mut self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) {
        self.files
            .insert(normalize_path(path.as_ref()), contents.into());
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl SourceLoader for MemoryLoader {
    fn load(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files
            .get(&normalize_path(path))
            .cloned()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no such file: {}", path.display()),
                )
            })
    }
}

/// Normalize a path by resolving `.` and `..` components lexically.
///
/// A `..` with nothing left to pop is kept, so paths above the starting
/// directory stay distinct from paths below it.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    result.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    result.pop();
                } else {
                    result.push(component);
                }
            }
            _ => result.push(component),
        }
    }
    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;
