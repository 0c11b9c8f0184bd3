//! File tree operations
//!
//! Lists the files under a path, filters them by type, deletes selected
//! subsets and turns arbitrary strings into legal filenames. All filesystem
//! access goes through the [`FileSystem`] trait, so the same operations run
//! against the host ([`LocalFs`]) or an in-memory tree ([`MemoryFs`]).

pub mod backend;
pub mod config;
pub mod delete;
pub mod error;
pub mod filetype;
pub mod path;
pub mod sanitize;
pub mod tree;
pub mod walk;

pub use backend::{FileSystem, LocalFs, MemoryFs, Node};
pub use config::{ConfigStore, Settings};
pub use delete::{DeletePolicy, DeletionFailure, DeletionReport};
pub use error::{Error, ErrorCode, Result};
pub use filetype::file_type;
pub use sanitize::{is_legal_name, to_legal_name, to_legal_name_with};
pub use tree::FileTree;
