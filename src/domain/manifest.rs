//! Project manifest (`pyproject.toml`) inspection.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::domain::AppError;

static VERSION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^version\s*=\s*"([^"]+)""#).expect("version pattern must compile")
});

/// Facts read from the project manifest once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectManifest {
    pub version: String,
    pub name: Option<String>,
}

impl ProjectManifest {
    /// Read the manifest at `path`.
    ///
    /// Fails if the file is absent or carries no `version = "..."` line.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.is_file() {
            return Err(AppError::ManifestNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let version =
            extract_version(&content).ok_or_else(|| AppError::VersionNotFound(path.to_path_buf()))?;
        Ok(Self { version, name: project_name(&content) })
    }

    /// Git tag for this release.
    pub fn tag(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.version)
    }
}

/// Extract the first `version = "X"` value anchored at a line start.
pub fn extract_version(content: &str) -> Option<String> {
    VERSION_LINE.captures(content).map(|caps| caps[1].to_string())
}

#[derive(Deserialize)]
struct PyProject {
    project: Option<ProjectTable>,
}

#[derive(Deserialize)]
struct ProjectTable {
    name: Option<String>,
}

/// `[project] name`, when the manifest parses as TOML.
pub fn project_name(content: &str) -> Option<String> {
    let parsed: PyProject = toml::from_str(content).ok()?;
    parsed.project?.name.filter(|name| !name.trim().is_empty())
}
