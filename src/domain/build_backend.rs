use std::path::Path;

use crate::domain::CommandSpec;

/// Frontend used to produce the sdist and wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildBackend {
    /// `uv build`
    Uv,
    /// `<python> -m build`
    PythonBuild,
}

impl BuildBackend {
    /// `uv` wins when the project is locked with it or it is on the search path.
    pub fn select(has_lockfile: bool, uv_on_path: bool) -> Self {
        if has_lockfile || uv_on_path { BuildBackend::Uv } else { BuildBackend::PythonBuild }
    }

    pub fn label(self) -> &'static str {
        match self {
            BuildBackend::Uv => "uv",
            BuildBackend::PythonBuild => "python -m build",
        }
    }

    /// Build invocation writing its distributions into `out_dir`.
    pub fn command(self, python: &str, out_dir: &Path, cwd: &Path) -> CommandSpec {
        let out_dir = out_dir.to_string_lossy().into_owned();
        match self {
            BuildBackend::Uv => {
                CommandSpec::new("uv", cwd).args(["build", "--out-dir", out_dir.as_str()])
            }
            BuildBackend::PythonBuild => {
                CommandSpec::python_module(python, "build", cwd).arg("--outdir").arg(out_dir)
            }
        }
    }
}
