use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for pyship operations.
///
/// Every variant is fatal: the CLI prints it and exits with status 1.
/// Recoverable conditions (a failing `twine check`) are modeled as
/// [`CheckOutcome::Warning`](crate::domain::CheckOutcome) instead.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Release configuration is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Explicitly requested configuration file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Project manifest (pyproject.toml) is missing.
    #[error("{} not found. Run pyship from the project root.", .0.display())]
    ManifestNotFound(PathBuf),

    /// Manifest has no `version = "..."` line.
    #[error("Could not read version from {}", .0.display())]
    VersionNotFound(PathBuf),

    /// A required external tool is not runnable.
    #[error("Required tool '{tool}' is not available. {hint}")]
    ToolUnavailable { tool: String, hint: String },

    /// External command could not be started at all.
    #[error("Failed to execute '{command}': {details}")]
    CommandSpawn { command: String, details: String },

    /// External command ran and exited unsuccessfully.
    #[error("Command failed: {command}\n{stderr}")]
    CommandFailed { command: String, code: Option<i32>, stderr: String },

    /// Build finished without producing any distribution files.
    #[error("No distribution files found in {}", .0.display())]
    NoArtifacts(PathBuf),

    /// Reading an answer from the console failed.
    #[error("Failed to read answer: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }
}
