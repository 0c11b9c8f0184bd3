//! List and type commands

use std::io::Write;
use std::path::Path;

use filetree_fs::{Error, FileSystem, FileTree};

use crate::error::Result;

/// Run the list command
///
/// Unlike the library call, listing a path that does not exist is an error
/// here, so typos do not silently print nothing.
pub fn run_list(
    out: &mut impl Write,
    path: &Path,
    file_type: Option<&str>,
    canonical: bool,
    json: bool,
) -> Result<()> {
    let tree = FileTree::local();
    if tree.fs().inspect_root(path).is_none() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let files = match file_type {
        Some(ty) => tree.files_by_type(ty, path),
        None => tree.list_all_files(path),
    };
    let rendered: Vec<String> = files
        .iter()
        .map(|file| {
            if canonical {
                tree.resolve_string(file)
            } else {
                file.display().to_string()
            }
        })
        .collect();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&rendered)?)?;
    } else {
        for line in &rendered {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// Run the type command
pub fn run_type(out: &mut impl Write, path: &Path) -> Result<()> {
    writeln!(out, "{}", FileTree::local().file_type(path))?;
    Ok(())
}
