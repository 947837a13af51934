use std::path::PathBuf;

use crate::domain::{AppError, CommandOutput, CommandSpec};

/// Port for running external commands.
pub trait CommandRunner {
    /// Run a command to completion and capture its output.
    ///
    /// A non-zero exit is reported through [`CommandOutput::code`]; `Err` is
    /// reserved for commands that could not be started.
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, AppError>;

    /// Locate a program on the search path.
    fn find_program(&self, program: &str) -> Option<PathBuf>;
}
