//! Artifact validation and uploads.

use std::path::Path;

use crate::domain::{AppError, ArtifactSet, CheckOutcome, CommandSpec, PackageIndex, ReleaseConfig};
use crate::ports::CommandRunner;

use super::run_checked;

/// Run `twine check` over the artifacts.
///
/// A failing check is a warning, not an error: the release continues.
pub fn check_artifacts(
    runner: &impl CommandRunner,
    config: &ReleaseConfig,
    artifacts: &ArtifactSet,
    root: &Path,
) -> Result<CheckOutcome, AppError> {
    let spec = CommandSpec::python_module(&config.python, "twine", root)
        .arg("check")
        .args(artifacts.as_args());
    let output = runner.run(&spec)?;
    if output.success() {
        return Ok(CheckOutcome::Passed);
    }

    let details = [output.stdout.trim(), output.stderr.trim()]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n");
    log::warn!("`{}` exited with {:?}", spec, output.code);
    Ok(CheckOutcome::Warning { details })
}

/// Upload every artifact to `index`. A non-zero exit aborts the run.
pub fn upload(
    runner: &impl CommandRunner,
    config: &ReleaseConfig,
    index: PackageIndex,
    artifacts: &ArtifactSet,
    root: &Path,
) -> Result<(), AppError> {
    run_checked(runner, &index.upload_command(config, &artifacts.as_args(), root))?;
    Ok(())
}
