//! Git repository management and setup utilities
//!
//! Provides functions for creating throwaway repositories with branches and
//! upstream tracking relationships, plus a preconfigured command for the binary.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use git_upstream::core::error::{Result, UpstreamError};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    /// Get the repository path as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Runs a git command in `repo_path`, failing on a non-zero exit
pub fn git(repo_path: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()?;

    if !output.status.success() {
        return Err(UpstreamError::external_process(
            format!("git {}", args.join(" ")),
            String::from_utf8_lossy(&output.stderr).trim(),
        ));
    }
    Ok(())
}

/// Sets up a fresh git repository whose first branch is `main`
///
/// Basic git configuration is set to avoid user prompts during tests.
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let repo_path = temp_dir.path().join("repo");
    fs::create_dir(&repo_path)?;

    git(&repo_path, &["init"])?;
    git(&repo_path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Sets up a git repository with an initial commit on `main`
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git(&repo.path, &["add", "initial.txt"])?;
    git(&repo.path, &["commit", "-m", "Initial commit"])?;

    Ok(repo)
}

/// Creates a file with specified content in the repository
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(filename), content)?;
    Ok(())
}

/// Creates `branch` at the tip of `upstream` and sets `upstream` as its tracking branch
pub fn create_tracking_branch(repo_path: &Path, branch: &str, upstream: &str) -> Result<()> {
    git(repo_path, &["branch", "--track", branch, upstream])
}

/// Checks out `branch` and records a commit on it
pub fn commit_on_branch(repo_path: &Path, branch: &str, message: &str) -> Result<()> {
    git(repo_path, &["checkout", "-q", branch])?;
    let filename = format!("{}.txt", branch.replace('/', "-"));
    create_file(repo_path, &filename, message)?;
    git(repo_path, &["add", &filename])?;
    git(repo_path, &["commit", "-m", message])
}

/// Builds a git-upstream command isolated from the user's configuration
///
/// `XDG_CONFIG_HOME` points into `scratch`, so a config file only exists when a
/// test writes one with [`write_config`].
pub fn upstream_command(scratch: &Path) -> Result<Command> {
    let mut cmd = Command::cargo_bin("git-upstream")
        .map_err(|e| UpstreamError::external_process("cargo_bin git-upstream", e.to_string()))?;
    cmd.env("XDG_CONFIG_HOME", scratch.join("config"))
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG");
    Ok(cmd)
}

/// Writes a config.json where [`upstream_command`] will look for it
pub fn write_config(scratch: &Path, content: &str) -> Result<()> {
    let dir = scratch.join("config").join("git-upstream");
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("config.json"), content)?;
    Ok(())
}

/// Writes a branch listing to a file and returns its path
pub fn write_listing(scratch: &Path, content: &str) -> Result<PathBuf> {
    let path = scratch.join("branches.txt");
    fs::write(&path, content)?;
    Ok(path)
}
