//! Resolution inputs that would otherwise come from process state

use std::path::PathBuf;

use crate::Result;

/// Package manager used to run synthesized script tasks
pub const DEFAULT_PACKAGE_MANAGER: &str = "pnpm";

/// Explicit stand-ins for ambient process state.
///
/// The resolver never reads the current directory or the running platform
/// itself; tests inject fakes through these fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Directory descriptions of script tasks are made relative to
    pub cwd: PathBuf,
    /// Platform identifier selecting `Taskfile_<platform>.yml`
    pub platform: String,
    /// Binary invoked as `<package_manager> run <script>`
    pub package_manager: String,
}

impl ResolveOptions {
    /// Options for `cwd` on the running platform with the default package manager.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            platform: current_platform().to_string(),
            package_manager: DEFAULT_PACKAGE_MANAGER.to_string(),
        }
    }

    /// Options from the real process environment.
    pub fn from_env() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| taskfile_fs::Error::io(".", e))?;
        Ok(Self::new(cwd))
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn with_package_manager(mut self, package_manager: impl Into<String>) -> Self {
        self.package_manager = package_manager.into();
        self
    }
}

/// Platform identifier of the running host, in the naming override
/// manifests use (`linux`, `darwin`, `windows`, ...).
pub fn current_platform() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        other => other,
    }
}
