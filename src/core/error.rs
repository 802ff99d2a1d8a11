//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`UpstreamError`] which covers every failure mode of the
//! branch tree pipeline. It uses `thiserror` for ergonomic error definitions and
//! includes constructor helpers for the variants that carry context.
//!
//! # Public API
//! - [`UpstreamError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, UpstreamError>`
//!
//! # Error Categories
//! - **Input**: Repository not found, failing `git` invocation, undecodable output
//! - **Parsing**: Status lines that do not follow the `git branch -vv` layout
//! - **Forest**: Tracking relationships that loop back on themselves
//! - **Configuration**: Unreadable config file, unknown color names

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-upstream
#[derive(Error, Debug)]
pub enum UpstreamError {
    // Input errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("'{command}' failed: {message}")]
    ExternalProcess { command: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Branch listing is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    // Parsing errors
    #[error("Malformed status line {line_number} ({reason}): '{line}'")]
    MalformedStatusLine {
        line_number: usize,
        line: String,
        reason: String,
    },

    // Forest errors
    #[error("Branch '{branch}' is part of an upstream tracking cycle")]
    CycleDetected { branch: String },

    // Configuration errors
    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Unknown color '{name}' in configuration")]
    InvalidColor { name: String },
}

/// Convenience type alias for Results using UpstreamError
pub type Result<T> = std::result::Result<T, UpstreamError>;

impl UpstreamError {
    /// Create an external process error for a failed command
    pub fn external_process(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalProcess {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Create a malformed status line error
    pub fn malformed_status_line(
        line_number: usize,
        line: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedStatusLine {
            line_number,
            line: line.into(),
            reason: reason.into(),
        }
    }

    /// Create a cycle detected error
    pub fn cycle_detected(branch: impl Into<String>) -> Self {
        Self::CycleDetected {
            branch: branch.into(),
        }
    }

    /// Create a config parse error
    pub fn config_parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid color error
    pub fn invalid_color(name: impl Into<String>) -> Self {
        Self::InvalidColor { name: name.into() }
    }
}
