//! Integration tests running the shiplog binary against real repositories

use git2::{Repository, Signature};
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command instance for the shiplog binary, logging into `home`
fn shiplog_cmd(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("shiplog"));
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn repo_with_commits(subjects: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    let sig = Signature::now("Test", "test@example.com").unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    for subject in subjects {
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, subject, &tree, &parents)
            .unwrap();
    }

    dir
}

fn run_json(home: &TempDir, dir: &TempDir) -> serde_json::Value {
    let output = shiplog_cmd(home)
        .arg("-C")
        .arg(dir.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("stdout is not JSON ({}): {}", e, stdout))
}

#[test]
fn test_json_summary_is_valid_json() {
    let home = TempDir::new().unwrap();
    let dir = repo_with_commits(&["feat: first"]);

    let summary = run_json(&home, &dir);

    assert_eq!(summary["updated"], true);
    assert_eq!(summary["commits"], 1);
    assert_eq!(summary["created"], true);
    assert_eq!(summary["duplicate"], false);
}

#[test]
fn test_json_stays_valid_when_entry_is_duplicated() {
    let home = TempDir::new().unwrap();
    let dir = repo_with_commits(&["feat: first"]);

    run_json(&home, &dir);
    let summary = run_json(&home, &dir);

    assert_eq!(summary["updated"], true);
    assert_eq!(summary["created"], false);
    assert_eq!(summary["duplicate"], true);
}

#[test]
fn test_text_output_warns_about_duplicate() {
    let home = TempDir::new().unwrap();
    let dir = repo_with_commits(&["fix: second"]);

    shiplog_cmd(&home).arg("-C").arg(dir.path()).assert().success();

    shiplog_cmd(&home)
        .arg("-C")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_empty_repository_exits_with_git_error() {
    let home = TempDir::new().unwrap();
    let dir = repo_with_commits(&[]);

    shiplog_cmd(&home)
        .arg("-C")
        .arg(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no commits"));
}
