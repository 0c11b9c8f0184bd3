//! Sanitize command

use std::io::Write;

use filetree_fs::to_legal_name_with;

use crate::error::Result;

/// Run the sanitize command
pub fn run_sanitize(out: &mut impl Write, name: &str, replacement: &str) -> Result<()> {
    let legal = to_legal_name_with(name, replacement);
    if legal != name {
        tracing::debug!(original = name, sanitized = %legal, "Replaced illegal characters");
    }
    writeln!(out, "{legal}")?;
    Ok(())
}
