//! Filesystem access seam
//!
//! The traversal and deletion engines never touch `std::fs` directly. They go
//! through [`FileSystem`], which resolves each path once into a [`Node`].
//! [`LocalFs`] talks to the host filesystem; [`MemoryFs`] is a deterministic
//! in-memory tree for tests, including injected failures and races.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A filesystem entry as observed when inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Anything that is not a directory, with its byte length.
    File { len: u64 },
    /// A directory and its children in listing order.
    Directory { children: Vec<PathBuf> },
}

impl Node {
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }

    /// True for a zero-length file. Directories are never empty files.
    pub fn is_empty_file(&self) -> bool {
        matches!(self, Self::File { len: 0 })
    }
}

/// Access to a tree of files and directories.
pub trait FileSystem {
    /// Resolve `path` into a [`Node`], or `None` if nothing exists there.
    ///
    /// A directory whose listing cannot be read is reported as a directory with
    /// no children.
    fn inspect(&self, path: &Path) -> Option<Node>;

    /// [`inspect`](Self::inspect) for the starting point of a walk.
    ///
    /// Backends that keep links opaque during descent still enter a link
    /// given as the root.
    fn inspect_root(&self, path: &Path) -> Option<Node> {
        self.inspect(path)
    }

    /// Whether `path` currently is a directory.
    fn is_dir(&self, path: &Path) -> bool {
        self.inspect(path).is_some_and(|node| node.is_dir())
    }

    /// Delete a single non-directory entry.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Delete an empty directory.
    fn remove_dir(&self, path: &Path) -> io::Result<()>;

    /// Canonical, symlink-free absolute form of `path`.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn inspect(&self, path: &Path) -> Option<Node> {
        (**self).inspect(path)
    }

    fn inspect_root(&self, path: &Path) -> Option<Node> {
        (**self).inspect_root(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        (**self).remove_file(path)
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        (**self).remove_dir(path)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        (**self).canonicalize(path)
    }
}

/// The host filesystem.
///
/// Links are resolved for their kind and length but never entered during
/// descent. A link to a file is reported as a file with the target's length (the
/// link's own length if it dangles). A link to a directory is reported as a
/// directory with no children, so it is never listed as a file and removing
/// it removes only the link. A link passed as the root is followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    fn list(path: &Path) -> Vec<PathBuf> {
        // The listing handle is dropped before the caller descends.
        match fs::read_dir(path) {
            Ok(entries) => entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .collect(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Directory listing failed, treating as empty");
                Vec::new()
            }
        }
    }
}

impl FileSystem for LocalFs {
    fn inspect(&self, path: &Path) -> Option<Node> {
        let metadata = fs::symlink_metadata(path).ok()?;
        if metadata.is_dir() {
            return Some(Node::Directory {
                children: Self::list(path),
            });
        }
        if !metadata.file_type().is_symlink() {
            return Some(Node::File {
                len: metadata.len(),
            });
        }

        match fs::metadata(path) {
            Ok(target) if target.is_dir() => {
                tracing::debug!(path = %path.display(), "Not descending into linked directory");
                Some(Node::Directory {
                    children: Vec::new(),
                })
            }
            Ok(target) => Some(Node::File { len: target.len() }),
            Err(_) => Some(Node::File {
                len: metadata.len(),
            }),
        }
    }

    fn inspect_root(&self, path: &Path) -> Option<Node> {
        match fs::metadata(path) {
            Ok(target) if target.is_dir() => Some(Node::Directory {
                children: Self::list(path),
            }),
            _ => self.inspect(path),
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok_and(|m| m.is_dir())
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        if fs::symlink_metadata(path)?.file_type().is_symlink() {
            // Unlink; the target directory is left in place.
            return fs::remove_file(path);
        }
        fs::remove_dir(path)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        dunce::canonicalize(path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemEntry {
    File(u64),
    Dir,
}

/// An in-memory tree with a sorted listing order.
///
/// Built with the `with_*` methods; failures can be injected per path:
///
/// ```
/// use filetree_fs::{FileSystem, MemoryFs};
/// use std::path::Path;
///
/// let fs = MemoryFs::new()
///     .with_file("/root/a.txt", 0)
///     .with_file("/root/b.txt", 10)
///     .fail_removal_of("/root/b.txt");
///
/// assert!(fs.remove_file(Path::new("/root/a.txt")).is_ok());
/// assert!(fs.remove_file(Path::new("/root/b.txt")).is_err());
/// ```
#[derive(Debug, Default)]
pub struct MemoryFs {
    entries: RefCell<BTreeMap<PathBuf, MemEntry>>,
    undeletable: BTreeSet<PathBuf>,
    unlistable: BTreeSet<PathBuf>,
    vanished: BTreeSet<PathBuf>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file of `len` bytes, creating missing parent directories.
    ///
    /// A file standing where a parent directory is needed becomes that
    /// directory.
    pub fn with_file(self, path: impl Into<PathBuf>, len: u64) -> Self {
        let path = path.into();
        self.insert_parents(&path);
        self.entries.borrow_mut().insert(path, MemEntry::File(len));
        self
    }

    /// Add a directory, creating missing parent directories.
    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.insert_parents(&path);
        self.entries.borrow_mut().insert(path, MemEntry::Dir);
        self
    }

    /// Make every removal of `path` fail with `PermissionDenied`.
    pub fn fail_removal_of(mut self, path: impl Into<PathBuf>) -> Self {
        self.undeletable.insert(path.into());
        self
    }

    /// Make the listing of directory `path` come back empty.
    pub fn fail_listing_of(mut self, path: impl Into<PathBuf>) -> Self {
        self.unlistable.insert(path.into());
        self
    }

    /// Keep `path` in its parent's listing but report it as absent when
    /// inspected, as if another process removed it in between.
    pub fn vanish_after_listing(mut self, path: impl Into<PathBuf>) -> Self {
        self.vanished.insert(path.into());
        self
    }

    /// Whether anything exists at `path`.
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.entries.borrow().contains_key(path.as_ref())
    }

    /// Every path currently stored, in sorted order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.entries.borrow().keys().cloned().collect()
    }

    fn insert_parents(&self, path: &Path) {
        let mut entries = self.entries.borrow_mut();
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            entries.insert(ancestor.to_path_buf(), MemEntry::Dir);
        }
    }

    fn children_of(&self, dir: &Path) -> Vec<PathBuf> {
        self.entries
            .borrow()
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect()
    }

    fn check_removable(&self, path: &Path) -> io::Result<MemEntry> {
        if self.undeletable.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("removal of {} is denied", path.display()),
            ));
        }
        self.entries
            .borrow()
            .get(path)
            .copied()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such entry"))
    }
}

impl FileSystem for MemoryFs {
    fn inspect(&self, path: &Path) -> Option<Node> {
        if self.vanished.contains(path) {
            return None;
        }
        let entry = self.entries.borrow().get(path).copied()?;
        match entry {
            MemEntry::File(len) => Some(Node::File { len }),
            MemEntry::Dir if self.unlistable.contains(path) => Some(Node::Directory {
                children: Vec::new(),
            }),
            MemEntry::Dir => Some(Node::Directory {
                children: self.children_of(path),
            }),
        }
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        match self.check_removable(path)? {
            MemEntry::Dir => Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                "is a directory",
            )),
            MemEntry::File(_) => {
                self.entries.borrow_mut().remove(path);
                Ok(())
            }
        }
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        match self.check_removable(path)? {
            MemEntry::File(_) => Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                "not a directory",
            )),
            MemEntry::Dir if !self.children_of(path).is_empty() => Err(io::Error::new(
                io::ErrorKind::DirectoryNotEmpty,
                "directory not empty",
            )),
            MemEntry::Dir => {
                self.entries.borrow_mut().remove(path);
                Ok(())
            }
        }
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        if self.exists(path) {
            Ok(path.to_path_buf())
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, "no such entry"))
        }
    }
}
