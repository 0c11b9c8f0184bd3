//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use filetree_fs::DeletePolicy;

/// filetree - list, filter, delete and sanitize files in a tree
#[derive(Parser, Debug)]
#[command(name = "filetree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (.toml, .json, .yaml)
    #[arg(long, global = true, env = "FILETREE_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List every file under a path
    ///
    /// Examples:
    ///   filetree list .               # All files below the current directory
    ///   filetree list src -t rs       # Only .rs files, any case
    ///   filetree list src --json      # As a JSON array
    List {
        /// File or directory to list
        path: PathBuf,

        /// Only files of this type (extension), compared ignoring case
        #[arg(short = 't', long = "type")]
        file_type: Option<String>,

        /// Print canonical paths
        #[arg(long)]
        canonical: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the type (extension) of a path
    Type {
        /// Path to classify; it does not need to exist
        path: PathBuf,
    },

    /// Delete files under a path
    ///
    /// Examples:
    ///   filetree delete build --policy all          # Every file, keep directories
    ///   filetree delete logs --policy empty         # Empty files directly in logs/
    ///   filetree delete tmp --policy dir --dry-run  # Preview removing tmp/ entirely
    Delete {
        /// File or directory to delete from
        path: PathBuf,

        /// Which entries to delete
        #[arg(short, long, value_enum)]
        policy: PolicyArg,

        /// Preview deletions without applying them
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Turn a string into a legal filename
    Sanitize {
        /// Candidate filename
        name: String,

        /// Replacement for each illegal character (default from settings, else "_")
        #[arg(short, long)]
        replacement: Option<String>,
    },
}

/// Deletion policy names accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyArg {
    /// Every file in the tree, directories kept
    All,
    /// Every empty file in the tree, directories kept
    AllEmpty,
    /// Files directly inside the path
    Files,
    /// Empty files directly inside the path
    Empty,
    /// The path and everything beneath it
    Dir,
}

impl From<PolicyArg> for DeletePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::All => DeletePolicy::AllFiles,
            PolicyArg::AllEmpty => DeletePolicy::AllEmptyFiles,
            PolicyArg::Files => DeletePolicy::Files,
            PolicyArg::Empty => DeletePolicy::EmptyFiles,
            PolicyArg::Dir => DeletePolicy::Dir,
        }
    }
}
