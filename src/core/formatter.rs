//! Rendering of a single [`Branch`] into a display line.
//!
//! A formatted line has two zones: the label (name plus active marker), which the
//! layout pads into a column, and the content (commit id, message and note) that
//! follows the column. The style travels alongside as data rather than as text
//! spliced into the line, so nothing in a commit message can break the split.

use crate::core::branch::Branch;
use crate::core::colors::BranchStyle;

/// Default prefix identifying remote-tracking branches
pub const DEFAULT_REMOTE_PREFIX: &str = "origin/";

const ACTIVE_MARKER: &str = " *";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedLine {
    pub label: String,
    pub style: Option<BranchStyle>,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct LineFormatter {
    remote_prefix: String,
}

impl Default for LineFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_REMOTE_PREFIX)
    }
}

impl LineFormatter {
    pub fn new(remote_prefix: impl Into<String>) -> Self {
        Self {
            remote_prefix: remote_prefix.into(),
        }
    }

    /// First match wins: active, then gone, then remote-tracking.
    pub fn style_for(&self, branch: &Branch) -> Option<BranchStyle> {
        if branch.active {
            Some(BranchStyle::Active)
        } else if branch.is_gone() {
            Some(BranchStyle::Gone)
        } else if !self.remote_prefix.is_empty() && branch.name.starts_with(&self.remote_prefix) {
            Some(BranchStyle::Remote)
        } else {
            None
        }
    }

    pub fn format(&self, branch: &Branch) -> FormattedLine {
        let mut label = branch.name.clone();
        if branch.active {
            label.push_str(ACTIVE_MARKER);
        }

        let mut content = [branch.commit_sha.as_str(), branch.commit_message.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        if let Some(note) = &branch.upstream_note {
            content.push_str(&format!(" [{note}]"));
        }

        FormattedLine {
            label,
            style: self.style_for(branch),
            content,
        }
    }
}
