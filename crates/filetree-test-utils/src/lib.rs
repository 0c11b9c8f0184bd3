//! Shared test utilities for the filetree workspace.
//!
//! Provides [`TestTree`], a temporary directory with helpers to lay out
//! files of chosen sizes and to assert on what survives an operation. It is
//! a dev-dependency only and never published.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree, removed on drop.
///
/// # Example
///
/// ```rust
/// use filetree_test_utils::TestTree;
///
/// let tree = TestTree::new()
///     .file("a.txt", 0)
///     .file("sub/b.txt", 10)
///     .dir("empty");
/// tree.assert_file_exists("sub/b.txt");
/// assert_eq!(tree.relative_files(), vec!["a.txt", "sub/b.txt"]);
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` inside the tree.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write a file of `len` bytes at `rel`, creating parent directories.
    pub fn file(self, rel: &str, len: usize) -> Self {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, vec![b'x'; len])
            .unwrap_or_else(|e| panic!("TestTree::file: failed to write {}: {e}", path.display()));
        self
    }

    /// Create the directory `rel` and its parents.
    pub fn dir(self, rel: &str) -> Self {
        fs::create_dir_all(self.path(rel)).unwrap();
        self
    }

    /// Paths of all files in the tree relative to the root, `/`-separated and
    /// sorted.
    pub fn relative_files(&self) -> Vec<String> {
        let mut files = Vec::new();
        collect_files(self.root(), self.root(), &mut files);
        files.sort();
        files
    }

    /// Assert that `rel` exists.
    pub fn assert_file_exists(&self, rel: &str) {
        assert!(self.path(rel).exists(), "Expected {rel} to exist");
    }

    /// Assert that `rel` does not exist.
    pub fn assert_missing(&self, rel: &str) {
        assert!(!self.path(rel).exists(), "Expected {rel} to be gone");
    }
}

fn collect_files(root: &Path, dir: &Path, out: &mut Vec<String>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect_files(root, &path, out);
        } else {
            let rel = path.strip_prefix(root).unwrap();
            out.push(rel.to_string_lossy().replace('\\', "/"));
        }
    }
}
