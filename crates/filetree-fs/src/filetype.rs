//! File type classification and filtering
//!
//! A file's type is everything after the last `.` of its path string. When
//! there is no `.` at all the whole string is returned, so `README` has the
//! type `README`. Note that the search covers the whole path, not just the
//! file name: `/a.d/README` has the type `d/README`.

use std::path::{Path, PathBuf};

use crate::backend::FileSystem;
use crate::tree::FileTree;

/// The type of a path string: the text after its last `.`.
///
/// ```
/// use filetree_fs::file_type;
///
/// assert_eq!(file_type("archive.tar.gz"), "gz");
/// assert_eq!(file_type("README"), "README");
/// ```
pub fn file_type(path: &str) -> &str {
    match path.rfind('.') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

fn same_type(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

impl<F: FileSystem> FileTree<F> {
    /// The type of `path`, computed on its resolved form.
    pub fn file_type(&self, path: impl AsRef<Path>) -> String {
        file_type(&self.resolve_string(path)).to_string()
    }

    /// Entries of `files` that are not directories and whose type equals
    /// `file_type`, ignoring case.
    ///
    /// An empty `file_type` matches nothing.
    pub fn filter_by_type<P: AsRef<Path>>(&self, file_type: &str, files: &[P]) -> Vec<PathBuf> {
        if file_type.is_empty() {
            return Vec::new();
        }

        let mut matched = Vec::new();
        for file in files {
            let file: &Path = file.as_ref();
            if !self.fs().is_dir(file) && same_type(&self.file_type(file), file_type) {
                matched.push(file.to_path_buf());
            }
        }
        matched
    }

    /// Files under `root` whose type equals `file_type`, ignoring case.
    pub fn files_by_type(&self, file_type: &str, root: impl AsRef<Path>) -> Vec<PathBuf> {
        let files = self.list_all_files(root);
        self.filter_by_type(file_type, &files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryFs;
    use rstest::rstest;

    #[rstest]
    #[case("archive.tar.gz", "gz")]
    #[case("notes.TXT", "TXT")]
    #[case("README", "README")]
    #[case("trailing.", "")]
    #[case(".hidden", "hidden")]
    #[case("/a.d/README", "d/README")]
    fn test_computes_type_from_last_dot(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(file_type(path), expected);
    }

    fn tree() -> FileTree<MemoryFs> {
        FileTree::new(
            MemoryFs::new()
                .with_file("/r/a.txt", 1)
                .with_file("/r/B.TXT", 1)
                .with_file("/r/c.md", 1)
                .with_dir("/r/dir.txt"),
        )
    }

    #[test]
    fn test_filter_matches_case_insensitively() {
        let tree = tree();
        let files = tree.list_all_files("/r");

        let upper = tree.filter_by_type("TXT", &files);
        let lower = tree.filter_by_type("txt", &files);

        assert_eq!(upper, lower);
        assert_eq!(
            upper,
            vec![PathBuf::from("/r/B.TXT"), PathBuf::from("/r/a.txt")]
        );
    }

    #[test]
    fn test_filter_skips_directories_even_with_matching_type() {
        let tree = tree();
        let candidates = [PathBuf::from("/r/dir.txt"), PathBuf::from("/r/a.txt")];

        assert_eq!(
            tree.filter_by_type("txt", &candidates),
            vec![PathBuf::from("/r/a.txt")]
        );
    }

    #[test]
    fn test_empty_type_matches_nothing() {
        let tree = tree();
        let files = tree.list_all_files("/r");

        assert!(tree.filter_by_type("", &files).is_empty());
    }

    #[test]
    fn test_files_by_type_walks_the_tree() {
        assert_eq!(
            tree().files_by_type("md", "/r"),
            vec![PathBuf::from("/r/c.md")]
        );
    }

    #[test]
    fn test_tree_file_type_uses_resolved_path() {
        assert_eq!(tree().file_type("/r/c.md"), "md");
    }
}
