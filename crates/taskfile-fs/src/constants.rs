//! Well-known manifest file names.

use std::path::Path;

/// File names the resolver recognizes on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFile {
    /// The canonical primary manifest, `Taskfile.yml`
    Taskfile,
    /// The script-list document, `package.json`
    PackageJson,
}

impl ManifestFile {
    /// Get the file name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Taskfile => "Taskfile.yml",
            Self::PackageJson => "package.json",
        }
    }

    /// Check whether `path` names this file (by final component).
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name == self.as_str())
    }
}

impl AsRef<Path> for ManifestFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ManifestFile {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ManifestFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// File name of the platform-specific override manifest, e.g. `Taskfile_linux.yml`.
pub fn platform_override_name(platform: &str) -> String {
    format!("Taskfile_{platform}.yml")
}
