//! Filesystem layer for the Taskfile resolver
//!
//! Provides document loading (YAML and JSON), upward manifest search and
//! lexical path helpers. Everything here is free of Taskfile semantics; the
//! merge and include logic lives in `taskfile-core`.

pub mod constants;
pub mod document;
pub mod error;
pub mod io;
pub mod path;
pub mod search;

pub use constants::{ManifestFile, platform_override_name};
pub use document::{DocumentStore, Format};
pub use error::{Error, Result};
pub use search::search_upward;
