//! Traversal: enumerate every file beneath a path

use std::path::{Path, PathBuf};

use crate::backend::{FileSystem, Node};
use crate::tree::FileTree;

impl<F: FileSystem> FileTree<F> {
    /// All files under `root`, directories excluded.
    ///
    /// A missing `root` yields nothing and a file `root` yields itself.
    /// Directories are expanded in listing order, depth first, so the result
    /// matches a recursive concatenation of each child's files. A root that
    /// links to a directory is entered; links below it are not.
    pub fn list_all_files(&self, root: impl AsRef<Path>) -> Vec<PathBuf> {
        let mut files = Vec::new();
        let mut stack = vec![(root.as_ref().to_path_buf(), true)];

        while let Some((path, is_root)) = stack.pop() {
            let node = if is_root {
                self.fs().inspect_root(&path)
            } else {
                self.fs().inspect(&path)
            };
            match node {
                None => {}
                Some(Node::File { .. }) => files.push(path),
                Some(Node::Directory { children }) => {
                    stack.extend(children.into_iter().rev().map(|child| (child, false)));
                }
            }
        }

        tracing::debug!(root = %root.as_ref().display(), count = files.len(), "Listed files");
        files
    }

    /// [`list_all_files`](Self::list_all_files) mapped to resolved path strings.
    pub fn list_all_file_paths(&self, root: impl AsRef<Path>) -> Vec<String> {
        self.list_all_files(root)
            .iter()
            .map(|file| self.resolve_string(file))
            .collect()
    }
}
