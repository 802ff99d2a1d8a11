//! Branch records as reported by `git branch -vv`.
//!
//! A [`Branch`] is identified by its name. Records are either parsed from a status
//! line or created as placeholders for upstream names that never get a status line
//! of their own (remote-tracking branches, deleted upstreams, the super-root).

/// Suffix appended to an upstream name whose remote branch has been deleted.
pub const GONE_SUFFIX: &str = " [gone]";

/// Name of the synthetic super-root that parents every untracked branch.
pub const SUPER_ROOT: &str = "";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub active: bool,
    pub commit_sha: String,
    pub commit_message: String,
    /// Tracked branch, `"<name> [gone]"` when the upstream was deleted.
    pub upstream_branch: Option<String>,
    /// Ahead/behind annotation. Always `None` without a live upstream.
    pub upstream_note: Option<String>,
    pub children: Vec<String>,
}

impl Branch {
    /// Placeholder record carrying nothing but a name
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn is_gone(&self) -> bool {
        self.name.ends_with(GONE_SUFFIX)
    }

    pub fn is_super_root(&self) -> bool {
        self.name == SUPER_ROOT
    }

    /// Copy the parsed fields of `other` into this record, keeping accumulated children.
    pub fn update_from(&mut self, other: Branch) {
        self.name = other.name;
        self.active = other.active;
        self.commit_sha = other.commit_sha;
        self.commit_message = other.commit_message;
        self.upstream_branch = other.upstream_branch;
        self.upstream_note = other.upstream_note;
    }
}

/// Build the upstream name used for a deleted tracking branch
pub fn gone_name(upstream: &str) -> String {
    format!("{upstream}{GONE_SUFFIX}")
}
