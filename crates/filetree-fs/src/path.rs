//! Path resolution
//!
//! Turns a path into the form reported back to callers: canonical when the
//! platform allows it, otherwise absolute, otherwise unchanged. Resolution
//! failures are never surfaced.

use std::path::{Path, PathBuf};

use crate::backend::FileSystem;

/// Resolve `path` to its canonical form, falling back to its absolute form.
///
/// If even the absolute form cannot be computed (an empty path, or an
/// unreadable working directory), the path is returned as given.
pub fn resolve<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> PathBuf {
    match fs.canonicalize(path) {
        Ok(canonical) => canonical,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Canonicalization failed, using absolute path");
            std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
        }
    }
}

/// [`resolve`] rendered as a string, with non-UTF-8 bytes replaced.
pub fn resolve_string<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> String {
    resolve(fs, path).to_string_lossy().into_owned()
}
