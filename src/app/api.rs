//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::io;
use std::path::{Path, PathBuf};

use crate::adapters::{ConsolePrompter, ProcessCommandRunner};
use crate::app::{AppContext, commands::release};
use crate::domain::config::load_config;

pub use crate::domain::{AppError, CheckOutcome, ReleaseConfig, ReleaseOutcome};

/// Overrides applied on top of the project's release configuration.
#[derive(Debug, Clone, Default)]
pub struct ReleaseOptions {
    /// Config file to use instead of `<root>/pyship.toml`.
    pub config: Option<PathBuf>,
    /// Interpreter overriding `python` from the config.
    pub python: Option<String>,
}

/// Resolve the release configuration for a project root.
pub fn resolve_config(root: &Path, options: &ReleaseOptions) -> Result<ReleaseConfig, AppError> {
    let mut config = load_config(root, options.config.as_deref())?;
    if let Some(python) = &options.python {
        config.python = python.clone();
    }
    config.validate()?;
    Ok(config)
}

/// Release the project in the current directory.
pub fn release(options: ReleaseOptions) -> Result<ReleaseOutcome, AppError> {
    release_at(std::env::current_dir()?, options)
}

/// Release the project rooted at `path`.
pub fn release_at(
    path: impl Into<PathBuf>,
    options: ReleaseOptions,
) -> Result<ReleaseOutcome, AppError> {
    let root = path.into();
    if !root.is_dir() {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Project directory not found: {}", root.display()),
        )));
    }

    let config = resolve_config(&root, &options)?;
    let ctx = AppContext::new(root, config, ProcessCommandRunner::new(), ConsolePrompter::new());
    release::execute(&ctx)
}
