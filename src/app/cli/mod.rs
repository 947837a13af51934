//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;

use crate::app::api::{self, ReleaseOptions};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "pyship")]
#[command(version)]
#[command(
    about = "Build, check, and publish a Python package to PyPI, then tag the release",
    long_about = None
)]
struct Cli {
    /// Project root containing pyproject.toml (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    directory: Option<PathBuf>,
    /// Release config file (defaults to pyship.toml in the project root)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Python interpreter used for `-m build` and `-m twine`
    #[arg(long, value_name = "BIN")]
    python: Option<String>,
    /// Log every external command
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = ReleaseOptions { config: cli.config, python: cli.python };
    let result: Result<(), AppError> = match cli.directory {
        Some(dir) => api::release_at(dir, options).map(|_| ()),
        None => api::release(options).map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
