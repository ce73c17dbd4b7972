//! Primary manifest discovery

use std::path::{Path, PathBuf};

/// Finds the primary manifest for a start directory.
///
/// Returns `Ok(None)` when nothing is found. Implemented for closures so
/// tests can substitute a fake without touching the filesystem.
pub trait ManifestLocator {
    fn locate(&self, start: &Path, file_name: &str) -> taskfile_fs::Result<Option<PathBuf>>;
}

/// Walks from the start directory up through its ancestors.
#[derive(Debug, Default, Clone, Copy)]
pub struct UpwardSearch;

impl ManifestLocator for UpwardSearch {
    fn locate(&self, start: &Path, file_name: &str) -> taskfile_fs::Result<Option<PathBuf>> {
        taskfile_fs::search_upward(start, file_name)
    }
}

impl<F> ManifestLocator for F
where
    F: Fn(&Path, &str) -> taskfile_fs::Result<Option<PathBuf>>,
{
    fn locate(&self, start: &Path, file_name: &str) -> taskfile_fs::Result<Option<PathBuf>> {
        self(start, file_name)
    }
}
