//! Read-side I/O helpers

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Read a file's raw bytes.
///
/// Any failure to open or read the file is reported as `NotFound`. Content
/// is not inspected here; decoding errors belong to the document layer.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::not_found(path, e))
}

/// Stat a path, reporting failure as `NotFound`.
pub fn metadata(path: &Path) -> Result<fs::Metadata> {
    fs::metadata(path).map_err(|e| Error::not_found(path, e))
}

/// Whether `path` exists, following symlinks.
pub fn exists(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}
