//! Common assertion helpers for test output validation
//!
//! Provides predicates and checks for git-upstream output, error messages and
//! the column alignment of rendered trees.

#![allow(dead_code)]

use predicates::prelude::*;

const ESCAPE_START: char = '\x1b';

/// Creates a predicate that checks for git repository error messages
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Creates a predicate that checks for malformed line diagnostics
pub fn malformed_line(line_number: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("Malformed status line {line_number}"))
}

/// Removes ANSI SGR sequences so visible columns can be compared
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == ESCAPE_START {
            for inner in chars.by_ref() {
                if inner == 'm' {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }
    result
}

/// Visible column at which each line's content (first commit id) starts
pub fn content_columns(stdout: &str, shas: &[&str]) -> Vec<usize> {
    stdout
        .lines()
        .map(strip_ansi_codes)
        .filter_map(|line| shas.iter().find_map(|sha| line.find(sha)))
        .collect()
}
