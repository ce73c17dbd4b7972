//! Taskfile resolution with includes and platform overrides
//!
//! The `Resolver` finds the primary Taskfile, folds every declared include
//! into it under its namespace, applies the platform override manifest and
//! stamps each task with its final name.
//!
//! # Resolution order
//!
//! 1. Locate `Taskfile.yml` from the start directory upwards
//! 2. Decode it and record `PROJECT_ROOT`
//! 3. Merge includes, in lexicographic namespace order
//! 4. Merge `Taskfile_<platform>.yml` without a namespace, if present
//! 5. Stamp task names
//!
//! Every step is fail-fast; no partial manifest is returned.

use std::path::{Path, PathBuf};

use taskfile_fs::{ManifestFile, io, path, platform_override_name};

use crate::taskfile::{Manifest, TaskSummary, Var};
use crate::{Error, Result};

use super::decode::read_taskfile;
use super::locator::{ManifestLocator, UpwardSearch};
use super::options::ResolveOptions;
use super::package_json::read_package_json;

/// Reserved variable holding the absolute directory of the root Taskfile
pub const PROJECT_ROOT_VAR: &str = "PROJECT_ROOT";

/// Resolves a directory into one fully merged manifest.
pub struct Resolver<L = UpwardSearch> {
    locator: L,
    options: ResolveOptions,
}

impl Resolver<UpwardSearch> {
    /// Create a resolver that searches the filesystem upwards.
    pub fn new(options: ResolveOptions) -> Self {
        Self::with_locator(UpwardSearch, options)
    }
}

impl<L: ManifestLocator> Resolver<L> {
    /// Create a resolver with a custom manifest locator.
    pub fn with_locator(locator: L, options: ResolveOptions) -> Self {
        Self { locator, options }
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Resolve the Taskfile governing `dir`.
    ///
    /// A relative `dir` is taken relative to the configured `cwd`.
    ///
    /// # Errors
    ///
    /// - `NoManifestFound` if no `Taskfile.yml` is found
    /// - `NestedIncludesForbidden` if an included manifest has includes
    /// - `DuplicateTask` if a merge would shadow a task
    /// - `Fs` (`NotFound` / `MalformedDocument`) for unreadable or invalid files
    pub fn resolve(&self, dir: &Path) -> Result<Manifest> {
        let start = path::absolutize(dir, &self.options.cwd);
        let located = self
            .locator
            .locate(&start, ManifestFile::Taskfile.as_str())?
            .ok_or_else(|| Error::NoManifestFound {
                dir: dir.to_path_buf(),
            })?;
        let root_path = path::absolutize(&located, &self.options.cwd);

        tracing::debug!(path = %root_path.display(), "Loading root Taskfile");
        let mut manifest = read_taskfile(&root_path)?;

        // Includes are relative to the Taskfile, not to the start directory
        let root_dir = path::parent_dir(&root_path);
        let project_root = root_dir.clone();
        manifest.vars.insert(
            PROJECT_ROOT_VAR.to_string(),
            Var::Static(project_root.to_string_lossy().into_owned()),
        );

        let includes = std::mem::take(&mut manifest.includes);
        for (namespace, declared) in &includes {
            let included = self.read_include(&root_dir, &project_root, namespace, declared)?;
            manifest.merge(included, Some(namespace.as_str()))?;
        }

        self.apply_platform_override(&mut manifest, &root_dir)?;

        manifest.stamp_task_names();
        Ok(manifest)
    }

    /// Resolve and list task names with descriptions, sorted by name.
    pub fn resolve_tasks(&self, dir: &Path) -> Result<Vec<TaskSummary>> {
        Ok(self.resolve(dir)?.summaries())
    }

    /// Load one include and re-root its tasks' working directories.
    fn read_include(
        &self,
        root_dir: &Path,
        project_root: &Path,
        namespace: &str,
        declared: &Path,
    ) -> Result<Manifest> {
        let mut include_path = path::join_clean(root_dir, declared);
        if io::metadata(&include_path)?.is_dir() {
            include_path = include_path.join(ManifestFile::Taskfile.as_str());
        }

        tracing::debug!(namespace, path = %include_path.display(), "Loading include");
        let mut included = if ManifestFile::PackageJson.matches(&include_path) {
            read_package_json(project_root, &include_path, &self.options)?
        } else {
            read_taskfile(&include_path)?
        };

        if !included.includes.is_empty() {
            return Err(Error::NestedIncludesForbidden {
                namespace: namespace.to_string(),
                path: include_path,
            });
        }

        let include_dir = path::parent_dir(&include_path);
        for (name, task) in &mut included.tasks {
            task.dir = if task.has_dir() {
                path::join_clean(root_dir, &task.dir)
            } else {
                include_dir.clone()
            };
            tracing::trace!(namespace, task = %name, dir = %task.dir.display(), "Re-rooted task");
        }

        Ok(included)
    }

    /// Merge `Taskfile_<platform>.yml` next to the root Taskfile, if present.
    fn apply_platform_override(&self, manifest: &mut Manifest, root_dir: &Path) -> Result<()> {
        let file_name = platform_override_name(&self.options.platform);
        let override_path: PathBuf = path::join_clean(root_dir, Path::new(&file_name));
        if !io::exists(&override_path) {
            tracing::debug!(path = %override_path.display(), "No platform override found, skipping");
            return Ok(());
        }

        tracing::debug!(path = %override_path.display(), "Loading platform override");
        let platform_manifest = read_taskfile(&override_path)?;
        if !platform_manifest.includes.is_empty() {
            return Err(Error::NestedIncludesForbidden {
                namespace: file_name,
                path: override_path,
            });
        }

        manifest.merge(platform_manifest, None)
    }
}
