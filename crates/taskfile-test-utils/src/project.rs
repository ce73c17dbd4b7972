//! [`TestProject`] builder for Taskfile resolution scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory with helpers for writing Taskfiles,
/// script lists and platform overrides.
///
/// # Example
///
/// ```rust,no_run
/// use taskfile_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.taskfile("version: '2'\ntasks:\n  build:\n    cmds: [make]\n");
/// project.write("docs/Taskfile.yml", "version: '2'\ntasks: {}\n");
/// project.assert_file_exists("docs/Taskfile.yml");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the project.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        self.write_bytes(relative, content.as_bytes())
    }

    /// Write raw bytes, for content that is not valid UTF-8.
    pub fn write_bytes(&self, relative: &str, content: &[u8]) -> PathBuf {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        full_path
    }

    /// Create the directory `relative` (and its parents).
    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let full_path = self.path(relative);
        fs::create_dir_all(&full_path).unwrap();
        full_path
    }

    /// Write the root `Taskfile.yml`.
    pub fn taskfile(&self, content: &str) -> PathBuf {
        self.write("Taskfile.yml", content)
    }

    /// Write `Taskfile_<platform>.yml` next to the root Taskfile.
    pub fn platform_override(&self, platform: &str, content: &str) -> PathBuf {
        self.write(&format!("Taskfile_{platform}.yml"), content)
    }

    /// Write a `package.json` under `dir` with the given scripts, one per
    /// line, starting on line 3.
    pub fn package_json(&self, dir: &str, scripts: &[(&str, &str)]) -> PathBuf {
        let entries = scripts
            .iter()
            .map(|(name, cmd)| format!("    \"{name}\": \"{cmd}\""))
            .collect::<Vec<_>>()
            .join(",\n");
        let content = format!("{{\n  \"scripts\": {{\n{entries}\n  }}\n}}\n");
        let relative = if dir.is_empty() || dir == "." {
            "package.json".to_string()
        } else {
            format!("{dir}/package.json")
        };
        self.write(&relative, &content)
    }

    /// Assert that `path` (relative to the project root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let full_path = self.path(path);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "Expected {} to contain {:?}, got:\n{}",
            full_path.display(),
            content,
            file_content
        );
    }
}
