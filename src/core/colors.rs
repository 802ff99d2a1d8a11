//! Unified color system for branch state visualization.
//!
//! Every branch line is drawn in at most one style, chosen from its state. This
//! module maps those styles to ANSI SGR sequences so the layout code can splice
//! them into a line without caring which color is in use.
//!
//! # Public API
//! - [`BranchStyle`]: The branch states that get a color
//! - [`Palette`]: Color assignment per style, resolved through `colored::Color`
//! - [`RESET`]: Sequence that ends every styled line
//!
//! # Color Scheme
//! - **Active**: Green for the checked-out branch
//! - **Gone**: Red for upstreams deleted from the remote
//! - **Remote**: Blue for remote-tracking branches

use crate::core::error::{Result, UpstreamError};
use colored::Color;

/// Reset sequence appended to every styled line
pub const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchStyle {
    Active,
    Gone,
    Remote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub active: Color,
    pub gone: Color,
    pub remote: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            active: Color::Green,
            gone: Color::Red,
            remote: Color::Blue,
        }
    }
}

impl Palette {
    /// Build a palette from color names such as `"green"` or `"bright blue"`
    pub fn from_names(active: &str, gone: &str, remote: &str) -> Result<Self> {
        Ok(Self {
            active: parse_color(active)?,
            gone: parse_color(gone)?,
            remote: parse_color(remote)?,
        })
    }

    pub fn color(&self, style: BranchStyle) -> Color {
        match style {
            BranchStyle::Active => self.active,
            BranchStyle::Gone => self.gone,
            BranchStyle::Remote => self.remote,
        }
    }

    /// SGR escape for a style, e.g. `ESC[0;32m` for green
    pub fn escape(&self, style: BranchStyle) -> String {
        format!("\x1b[0;{}m", self.color(style).to_fg_str())
    }
}

fn parse_color(name: &str) -> Result<Color> {
    name.parse::<Color>()
        .map_err(|_| UpstreamError::invalid_color(name))
}
