//! Distribution files produced by the build step.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::domain::AppError;

/// A built distribution file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Path relative to the project root, as passed to twine.
    pub path: PathBuf,
    pub size: u64,
    pub sha256: String,
}

/// The non-empty, sorted set of artifacts enumerated once after the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    artifacts: Vec<Artifact>,
}

impl ArtifactSet {
    /// Enumerate regular, non-hidden files directly inside `root/dist_dir`.
    ///
    /// An empty or missing directory means the build failed silently and is fatal.
    pub fn collect(root: &Path, dist_dir: &Path) -> Result<Self, AppError> {
        let dir = root.join(dist_dir);
        if !dir.is_dir() {
            return Err(AppError::NoArtifacts(dist_dir.to_path_buf()));
        }

        let mut artifacts = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let name = entry.file_name();
            if name.to_string_lossy().starts_with('.') || !entry.file_type()?.is_file() {
                continue;
            }
            let (size, sha256) = digest(&entry.path())?;
            artifacts.push(Artifact { path: dist_dir.join(&name), size, sha256 });
        }

        if artifacts.is_empty() {
            return Err(AppError::NoArtifacts(dist_dir.to_path_buf()));
        }
        artifacts.sort_by(|a, b| a.path.cmp(&b.path));
        log::debug!("Collected {} artifact(s) from {}", artifacts.len(), dir.display());
        Ok(Self { artifacts })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter()
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Paths as command-line arguments.
    pub fn as_args(&self) -> Vec<String> {
        self.artifacts.iter().map(|a| a.path.to_string_lossy().into_owned()).collect()
    }
}

/// Stream a file through SHA-256, returning its size and hex digest.
fn digest(path: &Path) -> Result<(u64, String), AppError> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let size = io::copy(&mut file, &mut hasher)?;
    Ok((size, format!("{:x}", hasher.finalize())))
}
