//! Git Upstream - show local git branches as a tree of upstream tracking relationships.
//!
//! This library provides the pipeline behind the `git-upstream` binary: it parses
//! the output of `git branch -vv`, infers a forest from each branch's upstream,
//! draws that forest as an ASCII tree and aligns and colorizes the result.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Status line parsing into [`Branch`] records
//! - Forest construction with cycle detection
//! - Line formatting, tree drawing and column layout
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    render,
    Branch,
    BranchStyle,
    Config,
    Forest,
    ForestBuilder,
    FormattedLine,
    GitRepo,
    LineFormatter,
    Palette,
    Registry,
    Result,
    StatusParser,
    TreeLayout,
    TreeLine,
    TreeNode,
    UpstreamError,
};
