//! Scaffold a starter Taskfile

use std::fs;
use std::path::Path;

use colored::Colorize;
use taskfile_fs::ManifestFile;

use crate::error::{CliError, Result};

const DEFAULT_TASKFILE: &str = r#"# https://taskfile.dev

version: '2'

vars:
  GREETING: Hello, World!

tasks:
  default:
    cmds:
      - echo "{{.GREETING}}"
"#;

/// Run the init command, writing `Taskfile.yml` into `dir`.
pub fn run_init(dir: &Path) -> Result<()> {
    let path = dir.join(ManifestFile::Taskfile.as_str());
    if path.exists() {
        return Err(CliError::user(format!(
            "{} already exists",
            path.display()
        )));
    }

    fs::create_dir_all(dir)?;
    fs::write(&path, DEFAULT_TASKFILE)?;
    tracing::debug!(path = %path.display(), "Wrote starter Taskfile");

    println!("{} {}", "Created".green().bold(), path.display());
    Ok(())
}
