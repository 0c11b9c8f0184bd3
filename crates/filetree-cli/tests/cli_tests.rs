//! End-to-end tests for the filetree binary

use assert_cmd::Command;
use filetree_test_utils::TestTree;
use predicates::prelude::*;

/// Get a Command for the filetree binary
fn filetree_cmd() -> Command {
    let mut cmd = Command::cargo_bin("filetree").expect("Failed to find filetree binary");
    cmd.env_remove("FILETREE_CONFIG");
    cmd
}

// ============================================================================
// list / type
// ============================================================================

#[test]
fn test_list_prints_every_file() {
    let tree = TestTree::new().file("a.txt", 1).file("sub/b.rs", 1).dir("empty");

    filetree_cmd()
        .arg("list")
        .arg(tree.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("b.rs"))
        .stdout(predicate::str::contains("empty").not());
}

#[test]
fn test_list_type_filter_json() {
    let tree = TestTree::new().file("a.TXT", 1).file("b.md", 1);

    let output = filetree_cmd()
        .args(["list", "--type", "txt", "--json"])
        .arg(tree.root())
        .output()
        .unwrap();

    assert!(output.status.success());
    let files: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("a.TXT"));
}

#[test]
fn test_list_missing_path_fails_with_not_found_code() {
    let tree = TestTree::new();

    filetree_cmd()
        .arg("list")
        .arg(tree.path("missing"))
        .assert()
        .code(5)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_type_prints_last_extension() {
    filetree_cmd()
        .args(["type", "archive.tar.gz"])
        .assert()
        .success()
        .stdout("gz\n");
}

// ============================================================================
// delete
// ============================================================================

#[test]
fn test_delete_empty_shallow() {
    let tree = TestTree::new()
        .file("a.txt", 0)
        .file("b.txt", 10)
        .file("sub/c.txt", 0);

    filetree_cmd()
        .args(["delete", "--policy", "empty"])
        .arg(tree.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted"));

    assert_eq!(tree.relative_files(), vec!["b.txt", "sub/c.txt"]);
}

#[test]
fn test_delete_dir_dry_run_keeps_tree() {
    let tree = TestTree::new().file("victim/a.txt", 1);

    filetree_cmd()
        .args(["delete", "--policy", "dir", "--dry-run"])
        .arg(tree.path("victim"))
        .assert()
        .success()
        .stdout(predicate::str::contains("would delete"));

    tree.assert_file_exists("victim/a.txt");
}

#[test]
fn test_delete_dir_json_report() {
    let tree = TestTree::new().file("victim/a.txt", 1).dir("victim/b");

    let output = filetree_cmd()
        .args(["delete", "--policy", "dir", "--json"])
        .arg(tree.path("victim"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["policy"], "dir");
    assert_eq!(report["deleted"].as_array().unwrap().len(), 3);
    assert!(report["failed"].as_array().unwrap().is_empty());
    tree.assert_missing("victim");
}

#[test]
fn test_delete_requires_policy() {
    filetree_cmd()
        .args(["delete", "somewhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--policy"));
}

#[test]
fn test_config_file_enables_dry_run() {
    let tree = TestTree::new().file("a.txt", 1);
    let config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    std::fs::write(config.path(), "[delete]\ndry_run = true\n").unwrap();

    filetree_cmd()
        .args(["delete", "--policy", "all", "--config"])
        .arg(config.path())
        .arg(tree.root())
        .assert()
        .success();

    tree.assert_file_exists("a.txt");
}

// ============================================================================
// sanitize
// ============================================================================

#[test]
fn test_sanitize_default_replacement() {
    filetree_cmd()
        .args(["sanitize", "a:b*c"])
        .assert()
        .success()
        .stdout("a_b_c\n");
}

#[test]
fn test_sanitize_custom_replacement() {
    filetree_cmd()
        .args(["sanitize", "what?<now>", "--replacement", "-"])
        .assert()
        .success()
        .stdout("what--now-\n");
}

#[test]
fn test_sanitize_replacement_from_env_config() {
    let config = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    std::fs::write(config.path(), r#"{"sanitize": {"replacement": "+"}}"#).unwrap();

    filetree_cmd()
        .env("FILETREE_CONFIG", config.path())
        .args(["sanitize", "x|y"])
        .assert()
        .success()
        .stdout("x+y\n");
}

#[test]
fn test_unsupported_config_format_exit_code() {
    let config = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();

    filetree_cmd()
        .args(["sanitize", "x", "--config"])
        .arg(config.path())
        .assert()
        .code(4);
}
