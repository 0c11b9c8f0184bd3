//! Deletion policies
//!
//! All policies share one walk. It visits every entry the policy covers and
//! attempts each deletion regardless of earlier failures, so the outcome
//! reflects every attempt. A missing root has nothing to delete and succeeds.
//!
//! | Policy          | Subdirectories              | Files                |
//! |-----------------|-----------------------------|----------------------|
//! | `AllFiles`      | descended, kept             | deleted              |
//! | `AllEmptyFiles` | descended, kept             | deleted if 0 bytes   |
//! | `Files`         | untouched                   | deleted              |
//! | `EmptyFiles`    | untouched                   | deleted if 0 bytes   |
//! | `Dir`           | descended, then deleted     | deleted              |
//!
//! The root itself is deleted only by `Dir`, or when the root is a file that
//! the policy covers.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::backend::{FileSystem, Node};
use crate::tree::FileTree;
use crate::{Error, Result};

/// Which entries a deletion removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeletePolicy {
    /// Every file in the tree; directories stay.
    AllFiles,
    /// Every zero-length file in the tree; directories stay.
    AllEmptyFiles,
    /// Direct child files only.
    Files,
    /// Direct child zero-length files only.
    EmptyFiles,
    /// The whole tree, root included.
    Dir,
}

impl DeletePolicy {
    pub const ALL: [DeletePolicy; 5] = [
        Self::AllFiles,
        Self::AllEmptyFiles,
        Self::Files,
        Self::EmptyFiles,
        Self::Dir,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllFiles => "all-files",
            Self::AllEmptyFiles => "all-empty-files",
            Self::Files => "files",
            Self::EmptyFiles => "empty-files",
            Self::Dir => "dir",
        }
    }

    /// Whether subdirectories are descended into.
    pub fn is_deep(&self) -> bool {
        !matches!(self, Self::Files | Self::EmptyFiles)
    }

    /// Whether only zero-length files are deleted.
    pub fn empty_only(&self) -> bool {
        matches!(self, Self::AllEmptyFiles | Self::EmptyFiles)
    }

    fn covers(&self, node: &Node) -> bool {
        match node {
            Node::File { .. } if self.empty_only() => node.is_empty_file(),
            Node::File { .. } => true,
            Node::Directory { .. } => false,
        }
    }
}

impl fmt::Display for DeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry that could not be deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of one deletion call, entry by entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionReport {
    pub root: PathBuf,
    pub policy: DeletePolicy,
    /// Entries removed, in the order they were removed.
    pub deleted: Vec<PathBuf>,
    pub failed: Vec<DeletionFailure>,
}

impl DeletionReport {
    fn new(root: &Path, policy: DeletePolicy) -> Self {
        Self {
            root: root.to_path_buf(),
            policy,
            deleted: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// True when every attempted deletion succeeded, including when nothing
    /// was attempted.
    pub fn succeeded(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.deleted.len() + self.failed.len()
    }

    /// `Ok(self)` if every deletion succeeded, [`Error::PartialDeletion`]
    /// otherwise.
    pub fn into_result(self) -> Result<Self> {
        if self.succeeded() {
            return Ok(self);
        }
        Err(Error::PartialDeletion {
            attempted: self.attempted(),
            failed: self.failed.len(),
            root: self.root,
        })
    }
}

enum Step {
    Visit { path: PathBuf, is_root: bool },
    /// All children of this directory have been attempted.
    Leave(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    File,
    Dir,
}

impl<F: FileSystem> FileTree<F> {
    /// Walk `root` under `policy`, handing each deletion candidate to `on_target`
    /// in the order deletions must happen.
    fn for_each_target(
        &self,
        root: &Path,
        policy: DeletePolicy,
        mut on_target: impl FnMut(&Path, Target),
    ) {
        let mut stack = vec![Step::Visit {
            path: root.to_path_buf(),
            is_root: true,
        }];

        while let Some(step) = stack.pop() {
            let (path, is_root) = match step {
                Step::Leave(dir) => {
                    on_target(&dir, Target::Dir);
                    continue;
                }
                Step::Visit { path, is_root } => (path, is_root),
            };

            let node = if is_root {
                self.fs().inspect_root(&path)
            } else {
                self.fs().inspect(&path)
            };
            let Some(node) = node else {
                continue;
            };
            match node {
                Node::Directory { children } => {
                    if !is_root && !policy.is_deep() {
                        continue;
                    }
                    if policy == DeletePolicy::Dir {
                        stack.push(Step::Leave(path));
                    }
                    stack.extend(children.into_iter().rev().map(|child| Step::Visit {
                        path: child,
                        is_root: false,
                    }));
                }
                file => {
                    if policy.covers(&file) {
                        on_target(&path, Target::File);
                    }
                }
            }
        }
    }

    /// Delete under `root` according to `policy` and report every attempt.
    pub fn delete(&self, root: impl AsRef<Path>, policy: DeletePolicy) -> DeletionReport {
        let root = root.as_ref();
        let mut report = DeletionReport::new(root, policy);

        self.for_each_target(root, policy, |path, target| {
            let result = match target {
                Target::File => self.fs().remove_file(path),
                Target::Dir => self.fs().remove_dir(path),
            };
            match result {
                Ok(()) => {
                    tracing::debug!(path = %path.display(), "Deleted");
                    report.deleted.push(path.to_path_buf());
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to delete");
                    report.failed.push(DeletionFailure {
                        path: path.to_path_buf(),
                        error: e.to_string(),
                    });
                }
            }
        });

        tracing::debug!(
            root = %root.display(),
            %policy,
            deleted = report.deleted.len(),
            failed = report.failed.len(),
            "Deletion finished"
        );
        report
    }

    /// Entries [`delete`](Self::delete) would attempt, in order, without
    /// deleting anything.
    ///
    /// Under `Dir` a directory is listed after its contents.
    pub fn plan(&self, root: impl AsRef<Path>, policy: DeletePolicy) -> Vec<PathBuf> {
        let mut planned = Vec::new();
        self.for_each_target(root.as_ref(), policy, |path, _| {
            planned.push(path.to_path_buf())
        });
        planned
    }

    /// Delete every file under `root`, keeping directories.
    pub fn delete_all_files(&self, root: impl AsRef<Path>) -> bool {
        self.delete(root, DeletePolicy::AllFiles).succeeded()
    }

    /// Delete every zero-length file under `root`, keeping directories.
    pub fn delete_all_empty_files(&self, root: impl AsRef<Path>) -> bool {
        self.delete(root, DeletePolicy::AllEmptyFiles).succeeded()
    }

    /// Delete the files directly inside `root`.
    pub fn delete_files(&self, root: impl AsRef<Path>) -> bool {
        self.delete(root, DeletePolicy::Files).succeeded()
    }

    /// Delete the zero-length files directly inside `root`.
    pub fn delete_empty_files(&self, root: impl AsRef<Path>) -> bool {
        self.delete(root, DeletePolicy::EmptyFiles).succeeded()
    }

    /// Delete `root` and everything beneath it.
    pub fn delete_dir(&self, root: impl AsRef<Path>) -> bool {
        self.delete(root, DeletePolicy::Dir).succeeded()
    }
}
