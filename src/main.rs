use clap::Parser;
use git_upstream::commands::{execute_upstream, UpstreamOptions};
use git_upstream::core::print_error;
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-upstream")]
#[command(about = "Show local branches as a tree grouped by their upstream tracking branches")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Read `git branch -vv` output from a file ("-" for stdin) instead of running git
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Fail on the first malformed status line instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Print the tree without ANSI colors (also enabled by NO_COLOR)
    #[arg(long)]
    no_color: bool,

    /// Prefix that marks remote-tracking branches (default: "origin/")
    #[arg(long, value_name = "PREFIX")]
    remote_prefix: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let no_color_env = env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty());
    let options = UpstreamOptions {
        input: cli.input,
        strict: cli.strict,
        no_color: cli.no_color || no_color_env,
        remote_prefix: cli.remote_prefix,
    };

    if let Err(e) = execute_upstream(&options) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
