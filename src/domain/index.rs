use std::path::Path;

use crate::domain::{CommandSpec, ReleaseConfig};

/// Package index an upload targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageIndex {
    /// Pre-production index used for test uploads (TestPyPI by default).
    Staging,
    /// The canonical public index; twine's default repository.
    Production,
}

impl PackageIndex {
    pub fn display_name(self, config: &ReleaseConfig) -> String {
        match self {
            PackageIndex::Staging => match config.staging.repository.as_str() {
                "testpypi" => "TestPyPI".to_string(),
                other => other.to_string(),
            },
            PackageIndex::Production => "PyPI".to_string(),
        }
    }

    /// `twine upload` invocation for this index.
    pub fn upload_command(
        self,
        config: &ReleaseConfig,
        artifacts: &[String],
        cwd: &Path,
    ) -> CommandSpec {
        let spec = CommandSpec::python_module(&config.python, "twine", cwd).arg("upload");
        let spec = match self {
            PackageIndex::Staging => {
                spec.args(["--repository", config.staging.repository.as_str()])
            }
            PackageIndex::Production => spec,
        };
        spec.args(artifacts.iter().cloned())
    }
}
