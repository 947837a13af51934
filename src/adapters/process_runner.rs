use std::path::PathBuf;
use std::process::Command;

use crate::domain::{AppError, CommandOutput, CommandSpec};
use crate::ports::CommandRunner;

/// Runs commands as child processes, blocking until they exit.
#[derive(Debug, Clone, Default)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, AppError> {
        log::debug!("Running `{}` in {}", spec, spec.cwd.display());

        let output = Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(&spec.cwd)
            .output()
            .map_err(|e| AppError::CommandSpawn {
                command: spec.to_string(),
                details: e.to_string(),
            })?;

        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        log::debug!("`{}` exited with {:?}", spec, result.code);
        Ok(result)
    }

    fn find_program(&self, program: &str) -> Option<PathBuf> {
        match which::which(program) {
            Ok(path) => {
                log::debug!("Found {} at: {}", program, path.display());
                Some(path)
            }
            Err(e) => {
                log::debug!("{} not found in PATH: {}", program, e);
                None
            }
        }
    }
}
