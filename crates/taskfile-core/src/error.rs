//! Error types for taskfile-core

use std::path::PathBuf;

/// Result type for taskfile-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving and merging Taskfiles
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No primary manifest in the start directory or any ancestor
    #[error("No Taskfile.yml found in {dir} or any parent directory. Use \"taskfile init\" to create one")]
    NoManifestFound { dir: PathBuf },

    /// An included manifest declares includes of its own
    #[error(
        "Included Taskfile {path} (namespace \"{namespace}\") can't have includes. Please move the include to the main Taskfile"
    )]
    NestedIncludesForbidden { namespace: String, path: PathBuf },

    /// A merge would shadow an existing task
    #[error("Found multiple tasks named \"{name}\"")]
    DuplicateTask { name: String },

    /// Filesystem or document error from taskfile-fs
    #[error(transparent)]
    Fs(#[from] taskfile_fs::Error),
}

impl Error {
    /// Whether this is a missing or unreadable file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Fs(taskfile_fs::Error::NotFound { .. }))
    }

    /// Whether this is a document that failed to parse.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Fs(taskfile_fs::Error::MalformedDocument { .. }))
    }
}
