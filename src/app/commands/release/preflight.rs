//! Required tool probe.

use std::path::Path;

use crate::domain::{AppError, CommandSpec, ReleaseConfig};
use crate::ports::CommandRunner;

const TWINE_HINT: &str = "Install it with: pip install twine (or: uv pip install twine)";

/// Verify `<python> -m twine --version` runs. Any failure is fatal, no retry.
pub fn ensure_twine(
    runner: &impl CommandRunner,
    config: &ReleaseConfig,
    root: &Path,
) -> Result<(), AppError> {
    let spec = CommandSpec::python_module(&config.python, "twine", root).arg("--version");
    let available = match runner.run(&spec) {
        Ok(output) if output.success() => {
            log::debug!("twine available: {}", output.stdout.trim());
            true
        }
        Ok(output) => {
            log::debug!("`{}` exited with {:?}: {}", spec, output.code, output.stderr.trim());
            false
        }
        Err(e) => {
            log::debug!("{}", e);
            false
        }
    };

    if available {
        Ok(())
    } else {
        Err(AppError::ToolUnavailable { tool: "twine".to_string(), hint: TWINE_HINT.to_string() })
    }
}
