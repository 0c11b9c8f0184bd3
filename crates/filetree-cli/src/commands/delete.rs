//! Delete command

use std::io::Write;
use std::path::Path;

use colored::Colorize;
use filetree_fs::{DeletePolicy, DeletionReport, FileTree};

use crate::error::Result;

/// Run the delete command
///
/// Fails with a partial-deletion error (and its exit code) when any entry
/// could not be removed; the report is printed either way.
pub fn run_delete(
    out: &mut impl Write,
    path: &Path,
    policy: DeletePolicy,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let tree = FileTree::local();

    if dry_run {
        let planned = tree.plan(path, policy);
        if json {
            writeln!(out, "{}", serde_json::to_string_pretty(&planned)?)?;
            return Ok(());
        }
        for entry in &planned {
            writeln!(out, "{} {}", "would delete".yellow(), entry.display())?;
        }
        writeln!(
            out,
            "{} {} entries would be deleted ({})",
            "[dry-run]".dimmed(),
            planned.len(),
            policy
        )?;
        return Ok(());
    }

    let report = tree.delete(path, policy);
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        print_report(out, &report)?;
    }
    report.into_result()?;
    Ok(())
}

fn print_report(out: &mut impl Write, report: &DeletionReport) -> std::io::Result<()> {
    for entry in &report.deleted {
        writeln!(out, "{} {}", "deleted".green(), entry.display())?;
    }
    for failure in &report.failed {
        writeln!(
            out,
            "{} {}: {}",
            "failed".red().bold(),
            failure.path.display(),
            failure.error
        )?;
    }

    if report.attempted() == 0 {
        writeln!(out, "{} Nothing to delete", "OK".green().bold())?;
    } else if report.succeeded() {
        writeln!(
            out,
            "{} Deleted {} entries ({})",
            "OK".green().bold(),
            report.deleted.len(),
            report.policy
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use filetree_fs::Error;
    use filetree_test_utils::TestTree;

    #[test]
    fn test_dry_run_keeps_files() {
        let tree = TestTree::new().file("a.txt", 0);
        let mut out = Vec::new();

        run_delete(&mut out, tree.root(), DeletePolicy::AllFiles, true, false).unwrap();

        tree.assert_file_exists("a.txt");
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains(&tree.path("a.txt").display().to_string()));
        assert!(printed.contains("1 entries would be deleted (all-files)"));
    }

    #[test]
    fn test_dry_run_json_lists_plan() {
        let tree = TestTree::new().file("a.txt", 0).file("b.txt", 2);
        let mut out = Vec::new();

        run_delete(&mut out, tree.root(), DeletePolicy::EmptyFiles, true, true).unwrap();

        let planned: Vec<std::path::PathBuf> = serde_json::from_slice(&out).unwrap();
        assert_eq!(planned, vec![tree.path("a.txt")]);
    }

    #[test]
    fn test_delete_empty_files() {
        let tree = TestTree::new().file("a.txt", 0).file("b.txt", 3);
        let mut out = Vec::new();

        run_delete(&mut out, tree.root(), DeletePolicy::EmptyFiles, false, false).unwrap();

        tree.assert_missing("a.txt");
        tree.assert_file_exists("b.txt");
        assert!(String::from_utf8(out).unwrap().contains("Deleted 1 entries"));
    }

    #[test]
    fn test_delete_missing_path_succeeds() {
        let tree = TestTree::new();
        let mut out = Vec::new();

        run_delete(&mut out, &tree.path("gone"), DeletePolicy::Dir, false, true).unwrap();

        let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(report["deleted"], serde_json::json!([]));
        assert_eq!(report["failed"], serde_json::json!([]));
    }

    #[cfg(unix)]
    #[test]
    fn test_partial_failure_is_an_error() {
        use std::os::unix::fs::PermissionsExt;

        if std::process::Command::new("id")
            .arg("-u")
            .output()
            .is_ok_and(|o| String::from_utf8_lossy(&o.stdout).trim() == "0")
        {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let tree = TestTree::new().file("locked/a.txt", 1);
        let locked = tree.path("locked");
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o555)).unwrap();

        let mut out = Vec::new();
        let result = run_delete(&mut out, &locked, DeletePolicy::Files, false, false);

        let _ = std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755));
        assert!(matches!(
            result,
            Err(CliError::Fs(Error::PartialDeletion { failed: 1, .. }))
        ));
    }
}
