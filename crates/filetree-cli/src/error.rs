//! Error types for filetree-cli

use filetree_fs::ErrorCode;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from filetree-fs
    #[error(transparent)]
    Fs(#[from] filetree_fs::Error),

    /// Writing command output failed, e.g. a closed pipe
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering error
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}

impl ErrorCode for CliError {
    fn code(&self) -> i32 {
        match self {
            Self::Fs(e) => e.code(),
            Self::Io(_) => 2,
            Self::Json(_) => 7,
            Self::User { .. } => 1,
        }
    }
}
