//! Error types for taskfile-fs

use std::path::PathBuf;

/// Result type for taskfile-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in taskfile-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("File not found or unreadable: {path}: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} document at {path}: {message}")]
    MalformedDocument {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::NotFound {
            path: path.into(),
            source,
        }
    }
}
