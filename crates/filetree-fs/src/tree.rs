//! The [`FileTree`] entry point

use std::path::{Path, PathBuf};

use crate::backend::{FileSystem, LocalFs};

/// File tree operations over a [`FileSystem`].
///
/// Every call re-reads the filesystem; nothing is cached between calls.
/// Operations are grouped by module: traversal in [`walk`](crate::walk),
/// type filtering in [`filetype`](crate::filetype) and deletion in
/// [`delete`](crate::delete).
#[derive(Debug, Clone, Default)]
pub struct FileTree<F = LocalFs> {
    fs: F,
}

impl FileTree<LocalFs> {
    /// Operate on the host filesystem.
    pub fn local() -> Self {
        Self { fs: LocalFs }
    }
}

impl<F: FileSystem> FileTree<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// The underlying filesystem.
    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Canonical form of `path`, falling back to its absolute form.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        crate::path::resolve(&self.fs, path.as_ref())
    }

    /// [`resolve`](Self::resolve) as a lossy UTF-8 string.
    pub fn resolve_string(&self, path: impl AsRef<Path>) -> String {
        crate::path::resolve_string(&self.fs, path.as_ref())
    }
}
