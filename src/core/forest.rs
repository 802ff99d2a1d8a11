//! Branch registry and forest construction.
//!
//! Tracking relationships are flat (each branch names at most one upstream), so
//! the forest is inferred: every branch becomes a child of its upstream, and
//! branches without one hang off the synthetic super-root named `""`.
//!
//! # Public API
//! - [`Registry`]: Name-keyed branch records in first-discovery order
//! - [`ForestBuilder`]: Accumulates parsed branches and derives links once
//! - [`Forest`]: The finished registry, expandable into a [`TreeNode`]
//!
//! # Ordering
//! - **Children**: order in which their status lines appeared
//! - **Roots**: order in which the names were first seen, placeholders included

use crate::core::branch::{Branch, SUPER_ROOT};
use crate::core::error::{Result, UpstreamError};
use crate::core::formatter::{FormattedLine, LineFormatter};
use crate::core::tree::TreeNode;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<String, Branch>,
    order: Vec<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a branch, inserting a placeholder record when the name is new
    pub fn get_or_create(&mut self, name: &str) -> &mut Branch {
        if !self.entries.contains_key(name) {
            self.order.push(name.to_string());
        }
        self.entries
            .entry(name.to_string())
            .or_insert_with(|| Branch::placeholder(name))
    }

    pub fn get(&self, name: &str) -> Option<&Branch> {
        self.entries.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Branch> {
        self.order.retain(|entry| entry != name);
        self.entries.remove(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Branches in first-discovery order
    pub fn iter(&self) -> impl Iterator<Item = &Branch> {
        self.order.iter().filter_map(|name| self.entries.get(name))
    }
}

#[derive(Debug, Default)]
pub struct ForestBuilder {
    registry: Registry,
    parsed: Vec<String>,
}

impl ForestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a parsed branch, overwriting any placeholder of the same name.
    pub fn add(&mut self, branch: Branch) {
        let name = branch.name.clone();
        if let Some(upstream) = &branch.upstream_branch {
            self.registry.get_or_create(upstream);
        }

        if self.parsed.contains(&name) {
            log::warn!("Branch '{name}' listed more than once; keeping the last entry");
        } else {
            self.parsed.push(name.clone());
        }
        self.registry.get_or_create(&name).update_from(branch);
    }

    /// Link every branch under its upstream and every untracked branch under the super-root.
    pub fn finish(mut self) -> Forest {
        for name in &self.parsed {
            let upstream = self
                .registry
                .get(name)
                .and_then(|branch| branch.upstream_branch.clone());
            if let Some(upstream) = upstream {
                let parent = self.registry.get_or_create(&upstream);
                if !parent.children.contains(name) {
                    parent.children.push(name.clone());
                }
            }
        }

        // A branch listed again with a new upstream leaves its old upstream unreferenced
        let stale: Vec<String> = self
            .registry
            .iter()
            .filter(|branch| {
                !branch.is_super_root()
                    && branch.children.is_empty()
                    && !self.parsed.contains(&branch.name)
            })
            .map(|branch| branch.name.clone())
            .collect();
        for name in &stale {
            log::debug!("Dropping unreferenced upstream '{name}'");
            self.registry.remove(name);
        }

        let roots: Vec<String> = self
            .registry
            .iter()
            .filter(|branch| !branch.is_super_root() && branch.upstream_branch.is_none())
            .map(|branch| branch.name.clone())
            .collect();
        self.registry.get_or_create(SUPER_ROOT).children = roots;

        let active = self.registry.iter().filter(|branch| branch.active).count();
        if active > 1 {
            log::warn!("{active} branches are marked as checked out");
        }

        log::debug!(
            "Built forest: {} parsed branches, {} registry entries",
            self.parsed.len(),
            self.registry.len()
        );

        Forest {
            registry: self.registry,
            parsed: self.parsed,
        }
    }
}

impl FromIterator<Branch> for Forest {
    fn from_iter<I: IntoIterator<Item = Branch>>(iter: I) -> Self {
        let mut builder = ForestBuilder::new();
        for branch in iter {
            builder.add(branch);
        }
        builder.finish()
    }
}

#[derive(Debug)]
pub struct Forest {
    registry: Registry,
    parsed: Vec<String>,
}

impl Forest {
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn super_root(&self) -> Option<&Branch> {
        self.registry.get(SUPER_ROOT)
    }

    /// Names of the branches attached directly to the super-root
    pub fn roots(&self) -> &[String] {
        self.super_root()
            .map(|root| root.children.as_slice())
            .unwrap_or(&[])
    }

    /// Branches that came from a status line, in input order
    pub fn branches(&self) -> impl Iterator<Item = &Branch> {
        self.parsed.iter().filter_map(|name| self.registry.get(name))
    }

    /// Expand the forest into a tree of formatted lines rooted at the super-root.
    ///
    /// Fails with [`UpstreamError::CycleDetected`] when a branch cannot be reached
    /// from the super-root, which only happens when tracking loops back on itself.
    pub fn to_tree(&self, formatter: &LineFormatter) -> Result<TreeNode<Option<FormattedLine>>> {
        let mut visited = HashSet::new();
        let children = self
            .roots()
            .iter()
            .map(|name| self.expand(name, formatter, &mut visited))
            .collect::<Result<Vec<_>>>()?;

        if let Some(branch) = self.parsed.iter().find(|name| !visited.contains(name.as_str())) {
            return Err(UpstreamError::cycle_detected(branch.as_str()));
        }

        Ok(TreeNode::new(None, children))
    }

    fn expand<'a>(
        &'a self,
        name: &'a str,
        formatter: &LineFormatter,
        visited: &mut HashSet<&'a str>,
    ) -> Result<TreeNode<Option<FormattedLine>>> {
        if !visited.insert(name) {
            return Err(UpstreamError::cycle_detected(name));
        }

        let Some(branch) = self.registry.get(name) else {
            return Ok(TreeNode::leaf(Some(formatter.format(&Branch::placeholder(name)))));
        };

        let children = branch
            .children
            .iter()
            .map(|child| self.expand(child, formatter, visited))
            .collect::<Result<Vec<_>>>()?;

        Ok(TreeNode::new(Some(formatter.format(branch)), children))
    }
}
