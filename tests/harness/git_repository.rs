//! Real git fixtures for tag tests.

use std::path::Path;
use std::process::Command;

fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("git {} failed to start: {}", args.join(" "), e));
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Initialize a repository on `main` with a committer identity.
pub(crate) fn init_repo(repo_dir: &Path) {
    git(repo_dir, &["init", "--initial-branch=main"]);
    git(repo_dir, &["config", "user.email", "test@example.com"]);
    git(repo_dir, &["config", "user.name", "Test User"]);
}

pub(crate) fn init_bare_repo(path: &Path) {
    std::fs::create_dir_all(path).expect("create bare repo dir");
    git(path, &["init", "--bare"]);
}

pub(crate) fn add_origin_remote(repo_dir: &Path, url: &str) {
    git(repo_dir, &["remote", "add", "origin", url]);
}

pub(crate) fn commit_all(repo_dir: &Path, message: &str) {
    git(repo_dir, &["add", "."]);
    git(repo_dir, &["commit", "-m", message]);
}

/// Tags present in a repository, one per line.
pub(crate) fn tags(repo_dir: &Path) -> Vec<String> {
    git(repo_dir, &["tag", "--list"]).lines().map(str::to_string).collect()
}
