//! Release configuration loaded from an optional `pyship.toml`.

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::domain::AppError;

/// Default configuration file name at the project root.
pub const CONFIG_FILE: &str = "pyship.toml";

/// Configuration for a release run. Every field has a default matching the
/// conventional PyPI workflow, so the file is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReleaseConfig {
    /// File carrying the `version = "..."` line.
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,
    /// Interpreter used for `-m twine` and `-m build`.
    #[serde(default = "default_python")]
    pub python: String,
    /// Directory the build writes distributions into.
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
    /// Directories removed before building.
    #[serde(default = "default_clean_dirs")]
    pub clean_dirs: Vec<PathBuf>,
    /// Lockfile whose presence selects `uv build`.
    #[serde(default = "default_lockfile")]
    pub lockfile: PathBuf,
    /// Git remote the release tag is pushed to.
    #[serde(default = "default_remote")]
    pub remote: String,
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,
    #[serde(default)]
    pub staging: StagingConfig,
    #[serde(default)]
    pub production: ProductionConfig,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            python: default_python(),
            dist_dir: default_dist_dir(),
            clean_dirs: default_clean_dirs(),
            lockfile: default_lockfile(),
            remote: default_remote(),
            tag_prefix: default_tag_prefix(),
            staging: StagingConfig::default(),
            production: ProductionConfig::default(),
        }
    }
}

impl ReleaseConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.python.trim().is_empty() {
            return Err(AppError::config_error("python must not be empty"));
        }
        if self.remote.trim().is_empty() {
            return Err(AppError::config_error("remote must not be empty"));
        }
        if self.manifest.as_os_str().is_empty() {
            return Err(AppError::config_error("manifest must not be empty"));
        }
        ensure_inside_root("dist_dir", &self.dist_dir)?;
        for dir in &self.clean_dirs {
            ensure_inside_root("clean_dirs", dir)?;
        }
        self.staging.validate()?;
        Ok(())
    }
}

/// Staging index (TestPyPI) settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StagingConfig {
    /// Repository name passed to `twine upload --repository`.
    #[serde(default = "default_staging_repository")]
    pub repository: String,
    /// Simple index used in the post-upload install hint.
    #[serde(default = "default_staging_simple_index")]
    pub simple_index: Url,
}

impl Default for StagingConfig {
    fn default() -> Self {
        Self {
            repository: default_staging_repository(),
            simple_index: default_staging_simple_index(),
        }
    }
}

impl StagingConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.repository.trim().is_empty() {
            return Err(AppError::config_error("staging.repository must not be empty"));
        }
        Ok(())
    }
}

/// Production index (PyPI) settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductionConfig {
    /// Base URL of project pages, the project name is appended.
    #[serde(default = "default_project_url")]
    pub project_url: Url,
}

impl Default for ProductionConfig {
    fn default() -> Self {
        Self { project_url: default_project_url() }
    }
}

impl ProductionConfig {
    pub fn project_page(&self, name: &str) -> String {
        let base = self.project_url.as_str().trim_end_matches('/');
        format!("{}/{}/", base, name)
    }
}

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ReleaseConfig, AppError> {
    let config: ReleaseConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration for a project.
///
/// An explicit path must exist. Without one, `<root>/pyship.toml` is read
/// when present and defaults are used otherwise.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<ReleaseConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            let path = if path.is_absolute() { path.to_path_buf() } else { root.join(path) };
            if !path.is_file() {
                return Err(AppError::ConfigNotFound(path));
            }
            path
        }
        None => {
            let path = root.join(CONFIG_FILE);
            if !path.is_file() {
                log::debug!("No {} found, using defaults", CONFIG_FILE);
                return Ok(ReleaseConfig::default());
            }
            path
        }
    };

    log::debug!("Loading release config from {}", path.display());
    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}

fn ensure_inside_root(field: &str, path: &Path) -> Result<(), AppError> {
    if path.as_os_str().is_empty() {
        return Err(AppError::config_error(format!("{} must not contain empty paths", field)));
    }
    let escapes = path
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));
    if escapes {
        return Err(AppError::config_error(format!(
            "{} must be relative to the project root: {}",
            field,
            path.display()
        )));
    }
    Ok(())
}

fn default_manifest() -> PathBuf {
    PathBuf::from("pyproject.toml")
}

fn default_python() -> String {
    "python3".to_string()
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_clean_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("dist"), PathBuf::from("build")]
}

fn default_lockfile() -> PathBuf {
    PathBuf::from("uv.lock")
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

fn default_staging_repository() -> String {
    "testpypi".to_string()
}

fn default_staging_simple_index() -> Url {
    Url::parse("https://test.pypi.org/simple/").expect("Default staging index URL must be valid")
}

fn default_project_url() -> Url {
    Url::parse("https://pypi.org/project/").expect("Default project URL must be valid")
}
