//! Consolidated test utilities for git-upstream
//!
//! This module provides unified testing utilities for integration tests, covering
//! both real git repositories and canned `git branch -vv` listings.

pub mod assertions;
pub mod repository;
