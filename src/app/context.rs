use std::path::{Path, PathBuf};

use crate::domain::ReleaseConfig;
use crate::ports::{CommandRunner, Prompter};

/// Application context holding dependencies for a release run.
pub struct AppContext<R: CommandRunner, P: Prompter> {
    root: PathBuf,
    config: ReleaseConfig,
    runner: R,
    prompter: P,
}

impl<R: CommandRunner, P: Prompter> AppContext<R, P> {
    /// Create a new application context.
    pub fn new(root: PathBuf, config: ReleaseConfig, runner: R, prompter: P) -> Self {
        Self { root, config, runner, prompter }
    }

    /// Project root every command runs in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &ReleaseConfig {
        &self.config
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }
}
