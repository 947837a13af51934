//! Output cleanup and the build invocation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, BuildBackend, ReleaseConfig};
use crate::ports::CommandRunner;

use super::run_checked;

/// Remove `dist_dir` and each configured output directory that exists. Idempotent.
pub fn clean_outputs(config: &ReleaseConfig, root: &Path) -> Result<Vec<String>, AppError> {
    let mut targets = vec![config.dist_dir.as_path()];
    targets.extend(
        config.clean_dirs.iter().map(PathBuf::as_path).filter(|dir| *dir != config.dist_dir),
    );

    let mut removed = Vec::new();
    for dir in targets {
        let target = root.join(dir);
        if target.is_dir() {
            fs::remove_dir_all(&target)?;
            removed.push(dir.display().to_string());
        } else if target.exists() {
            fs::remove_file(&target)?;
            removed.push(dir.display().to_string());
        }
    }
    Ok(removed)
}

/// Pick the build frontend: a lockfile or `uv` on the search path selects uv.
pub fn select_backend(
    runner: &impl CommandRunner,
    config: &ReleaseConfig,
    root: &Path,
) -> BuildBackend {
    let has_lockfile = root.join(&config.lockfile).is_file();
    let uv_on_path = !has_lockfile && runner.find_program("uv").is_some();
    BuildBackend::select(has_lockfile, uv_on_path)
}

/// Run the build into `dist_dir`. Any failure is fatal and carries the captured stderr.
pub fn build(
    runner: &impl CommandRunner,
    backend: BuildBackend,
    config: &ReleaseConfig,
    root: &Path,
) -> Result<(), AppError> {
    run_checked(runner, &backend.command(&config.python, &config.dist_dir, root))?;
    Ok(())
}
