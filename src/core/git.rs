//! Access to the branch listing of a git repository.
//!
//! [`GitRepo`] locates the repository with `git2` and obtains the raw
//! `git branch -vv` text by running the `git` executable in its working directory.
//! The listing is returned untouched; parsing happens in
//! [`crate::core::status_parser`].

use crate::core::error::{Result, UpstreamError};
use git2::Repository;
use std::path::{Path, PathBuf};
use std::process::Command;

const BRANCH_STATUS_ARGS: [&str; 3] = ["branch", "-vv", "--no-color"];

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Discover the repository containing `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(GitRepo { repo })
    }

    pub fn get_repo_path(&self) -> PathBuf {
        self.repo.path().to_path_buf()
    }

    pub fn get_repository(&self) -> &Repository {
        &self.repo
    }

    /// Directory git commands run in; the git dir itself for bare repositories
    fn command_dir(&self) -> &Path {
        self.repo.workdir().unwrap_or_else(|| self.repo.path())
    }

    /// Raw output of `git branch -vv`, one line per local branch
    pub fn branch_status(&self) -> Result<String> {
        self.run_git_command(&BRANCH_STATUS_ARGS)
    }

    /// Execute a git command in the repository and capture its standard output
    fn run_git_command(&self, args: &[&str]) -> Result<String> {
        let display = format!("git {}", args.join(" "));
        log::debug!("Running '{display}' in {}", self.command_dir().display());

        let output = Command::new("git")
            .args(args)
            .current_dir(self.command_dir())
            .output()
            .map_err(|e| UpstreamError::external_process(&display, e.to_string()))?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            return Err(UpstreamError::external_process(display, error_msg.trim()));
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}
