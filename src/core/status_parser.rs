//! Parsing of `git branch -vv` output into [`Branch`] records.
//!
//! Each status line has the layout
//! `<marker> <name> <sha> [(<worktree>)] [[<upstream>[: <note>]]] <message>`.
//! The parser scans the line token by token instead of slicing at fixed offsets,
//! so short commit ids of any width and oddly named branches both work.
//!
//! # Public API
//! - [`StatusParser`]: Static methods to parse a single line or a whole listing
//!
//! # Special Cases
//! - **Detached HEAD**: `(HEAD detached at abc1234)` is kept as the branch name
//! - **Worktrees**: a `+` marker and a parenthesised worktree path are accepted
//! - **Deleted upstream**: a `gone` note turns the upstream into `"<name> [gone]"`

use crate::core::branch::{gone_name, Branch};
use crate::core::error::{Result, UpstreamError};

const CHECKOUT_MARKER: char = '*';
const WORKTREE_MARKER: char = '+';
const GONE_NOTE: &str = "gone";

pub struct StatusParser;

impl StatusParser {
    /// Parse a full branch listing, one branch per non-blank line.
    ///
    /// Malformed lines are logged and skipped unless `strict` is set, in which case
    /// the first one aborts the parse.
    pub fn parse(text: &str, strict: bool) -> Result<Vec<Branch>> {
        let mut branches = Vec::new();

        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match Self::parse_line(index + 1, line) {
                Ok(branch) => branches.push(branch),
                Err(e) if !strict => log::warn!("Skipping status line: {e}"),
                Err(e) => return Err(e),
            }
        }

        log::debug!("Parsed {} branches from status listing", branches.len());
        Ok(branches)
    }

    /// Parse one status line. `line_number` is 1-based and only used for diagnostics.
    pub fn parse_line(line_number: usize, line: &str) -> Result<Branch> {
        let malformed = |reason: &str| UpstreamError::malformed_status_line(line_number, line, reason);

        let mut chars = line.chars();
        let marker = chars.next();
        let active = match marker {
            Some(CHECKOUT_MARKER) => true,
            Some(' ') | Some(WORKTREE_MARKER) => false,
            _ => return Err(malformed("unexpected checkout marker")),
        };
        let rest = chars
            .as_str()
            .strip_prefix(' ')
            .ok_or_else(|| malformed("missing space after checkout marker"))?;

        let (name, rest) = split_name(rest).ok_or_else(|| malformed("missing branch name"))?;
        let (commit_sha, rest) = split_token(rest).ok_or_else(|| malformed("missing commit id"))?;
        if !is_commit_id(commit_sha) {
            return Err(malformed("invalid commit id"));
        }

        let mut rest = rest.trim_start();
        // Branches checked out in another worktree list the worktree path first
        if marker == Some(WORKTREE_MARKER) && rest.starts_with('(') {
            let close = rest
                .find(')')
                .ok_or_else(|| malformed("unclosed worktree path"))?;
            rest = rest[close + 1..].trim_start();
        }

        let mut upstream_branch = None;
        let mut upstream_note = None;
        if let Some(segment) = rest.strip_prefix('[') {
            let close = segment
                .find(']')
                .ok_or_else(|| malformed("unclosed tracking segment"))?;
            let interior = &segment[..close];
            rest = &segment[close + 1..];

            let (upstream, note) = match interior.split_once(':') {
                Some((upstream, note)) => (upstream.trim(), Some(note.trim())),
                None => (interior.trim(), None),
            };
            if upstream.is_empty() {
                return Err(malformed("empty upstream name"));
            }

            match note {
                Some(GONE_NOTE) => upstream_branch = Some(gone_name(upstream)),
                Some(note) if !note.is_empty() => {
                    upstream_branch = Some(upstream.to_string());
                    upstream_note = Some(note.to_string());
                }
                _ => upstream_branch = Some(upstream.to_string()),
            }
        }

        Ok(Branch {
            name: name.to_string(),
            active,
            commit_sha: commit_sha.to_string(),
            commit_message: rest.trim_start().to_string(),
            upstream_branch,
            upstream_note,
            children: Vec::new(),
        })
    }
}

/// Split off the branch name: a whitespace-free token or a `(...)` group
fn split_name(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.starts_with('(') {
        let close = input.find(')')?;
        return Some((&input[..=close], &input[close + 1..]));
    }
    split_token(input)
}

fn split_token(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    let end = input.find(char::is_whitespace).unwrap_or(input.len());
    Some((&input[..end], &input[end..]))
}

fn is_commit_id(token: &str) -> bool {
    (4..=64).contains(&token.len()) && token.chars().all(|c| c.is_ascii_hexdigit())
}
