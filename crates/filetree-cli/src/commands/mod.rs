//! Command implementations for filetree-cli

pub mod delete;
pub mod list;
pub mod sanitize;

pub use delete::run_delete;
pub use list::{run_list, run_type};
pub use sanitize::run_sanitize;
