//! Release tag creation.

use std::path::Path;

use crate::domain::{AppError, CommandSpec, ReleaseConfig};
use crate::ports::CommandRunner;

use super::run_checked;

/// `git tag <tag>` then `git push <remote> <tag>`. Either failing aborts.
pub fn create_and_push_tag(
    runner: &impl CommandRunner,
    config: &ReleaseConfig,
    tag: &str,
    root: &Path,
) -> Result<(), AppError> {
    run_checked(runner, &CommandSpec::new("git", root).args(["tag", tag]))?;
    let push = CommandSpec::new("git", root).args(["push", config.remote.as_str(), tag]);
    run_checked(runner, &push)?;
    Ok(())
}
