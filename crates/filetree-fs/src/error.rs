//! Error types for filetree-fs
//!
//! The tree operations themselves never fail with a typed error: missing
//! paths and per-entry deletion failures are folded into their plain results.
//! These errors cover the surfaces around them (configuration loading and the
//! opt-in conversion of a [`DeletionReport`](crate::DeletionReport) into a
//! `Result`).

use std::path::PathBuf;

/// Result type for filetree-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in filetree-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Path does not exist: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to delete {failed} of {attempted} entries under {root}")]
    PartialDeletion {
        root: PathBuf,
        attempted: usize,
        failed: usize,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Maps an error identity to a stable integer code.
///
/// Codes are part of the public contract: the `filetree` binary exits with
/// them, so scripts can branch on the failure kind.
pub trait ErrorCode {
    fn code(&self) -> i32;
}

impl ErrorCode for Error {
    fn code(&self) -> i32 {
        match self {
            Self::Io { .. } => 2,
            Self::ConfigParse { .. } => 3,
            Self::UnsupportedFormat { .. } => 4,
            Self::NotFound { .. } => 5,
            Self::PartialDeletion { .. } => 6,
        }
    }
}
