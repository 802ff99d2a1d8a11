//! Core functionality for the git-upstream tool.
//!
//! This module provides the pipeline that turns a `git branch -vv` listing into a
//! colorized tree: parsing, forest construction, formatting, drawing and layout.

pub mod branch;
pub mod colors;
pub mod config;
pub mod dirs;
pub mod error;
pub mod forest;
pub mod formatter;
pub mod git;
pub mod layout;
pub mod output;
pub mod status_parser;
pub mod tree;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{Result, UpstreamError};

// === Input ===
// Repository discovery and the raw branch listing
pub use git::GitRepo;

// === Branch model and parsing ===
// Status line parsing into structured branch records
pub use branch::Branch;
pub use status_parser::StatusParser;

// === Forest ===
// Registry of branches linked by upstream tracking
pub use forest::{Forest, ForestBuilder, Registry};

// === Rendering ===
// Line formatting, tree drawing and column layout
pub use colors::{BranchStyle, Palette};
pub use formatter::{FormattedLine, LineFormatter};
pub use layout::TreeLayout;
pub use tree::{render, TreeLine, TreeNode};

// === Configuration ===
pub use config::Config;

// === Output formatting ===
pub use output::print_error;
