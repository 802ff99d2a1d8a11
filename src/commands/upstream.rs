use crate::core::{
    config::Config,
    error::{Result, UpstreamError},
    forest::Forest,
    formatter::LineFormatter,
    git::GitRepo,
    layout::TreeLayout,
    status_parser::StatusParser,
    tree::render,
};
use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Command-line choices for a single run
#[derive(Debug, Clone, Default)]
pub struct UpstreamOptions {
    /// Read the listing from this file instead of running git; `-` is stdin
    pub input: Option<PathBuf>,
    pub strict: bool,
    pub no_color: bool,
    pub remote_prefix: Option<String>,
}

pub fn execute_upstream(options: &UpstreamOptions) -> Result<()> {
    let config = Config::load()?;
    let status = read_branch_status(options.input.as_deref())?;

    let remote_prefix = options
        .remote_prefix
        .clone()
        .unwrap_or_else(|| config.remote_prefix.clone());
    let formatter = LineFormatter::new(remote_prefix);
    let layout = TreeLayout::new(config.palette()?, !options.no_color);

    let lines = render_branch_tree(&status, &formatter, &layout, options.strict)?;
    if lines.is_empty() {
        log::debug!("No branches to display");
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", lines.join("\n"))?;
    Ok(())
}

/// Turn a raw `git branch -vv` listing into the final tree lines
pub fn render_branch_tree(
    status: &str,
    formatter: &LineFormatter,
    layout: &TreeLayout,
    strict: bool,
) -> Result<Vec<String>> {
    let forest: Forest = StatusParser::parse(status, strict)?.into_iter().collect();
    let tree = forest.to_tree(formatter)?;
    Ok(layout.apply(&render(&tree)))
}

fn read_branch_status(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path == Path::new("-") => {
            let mut status = String::new();
            io::stdin().read_to_string(&mut status)?;
            Ok(status)
        }
        Some(path) => {
            log::debug!("Reading branch listing from {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let current_dir = env::current_dir()?;
            let git_repo = GitRepo::open(&current_dir).map_err(|_| UpstreamError::NotInGitRepo)?;
            git_repo.branch_status()
        }
    }
}
