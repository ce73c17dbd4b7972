//! Synthesizing a manifest from a `package.json` script list
//!
//! Each entry of the `scripts` object becomes a task that runs the script
//! through the configured package manager. The task description points back
//! at the script's definition, e.g. `→ web/package.json:7`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use taskfile_fs::{DocumentStore, Format, path};

use crate::Result;
use crate::taskfile::{Cmd, Manifest, Task};

use super::ResolveOptions;

/// Version tag given to synthesized manifests
pub const SCRIPT_LIST_VERSION: &str = "2";

#[derive(Debug, Default, Deserialize)]
struct PackageJson {
    #[serde(default)]
    scripts: BTreeMap<String, String>,
}

/// Read `file` and build one task per script.
///
/// `project_root` is the absolute directory of the root Taskfile; `file` may
/// be relative to `options.cwd`.
pub fn read_package_json(
    project_root: &Path,
    file: &Path,
    options: &ResolveOptions,
) -> Result<Manifest> {
    let content = DocumentStore::new().read_source(file, Format::Json)?;
    let package: PackageJson = Format::Json.parse(file, &content)?;
    tracing::debug!(
        file = %file.display(),
        project_root = %project_root.display(),
        scripts = package.scripts.len(),
        "Synthesizing tasks from script list"
    );

    let absolute = path::absolutize(file, &options.cwd);
    let shown = path::relative_to(&options.cwd, &absolute).unwrap_or(absolute);

    let mut manifest = Manifest::new(SCRIPT_LIST_VERSION);
    for name in package.scripts.keys() {
        let line = find_line_number(&content, name)
            .map(|n| format!(":{n}"))
            .unwrap_or_default();
        let task = Task {
            desc: format!("→ {}{}", shown.display(), line),
            cmds: vec![Cmd::new(format!("{} run {}", options.package_manager, name))],
            ..Task::default()
        };
        manifest.tasks.insert(name.clone(), task);
    }

    Ok(manifest)
}

/// 1-based line of the first occurrence of `"<script>":` in `content`.
///
/// Best effort: a key formatted differently (e.g. a space before the colon)
/// is simply not found.
fn find_line_number(content: &str, script: &str) -> Option<usize> {
    let needle = format!("\"{script}\":");
    content
        .lines()
        .position(|line| line.contains(&needle))
        .map(|index| index + 1)
}
