//! Native manifest decoding

use std::path::Path;

use taskfile_fs::{DocumentStore, Format};

use crate::Result;
use crate::taskfile::Manifest;

/// Decode a YAML Taskfile.
///
/// The file is always read as YAML regardless of its extension.
pub fn read_taskfile(path: &Path) -> Result<Manifest> {
    let manifest = DocumentStore::new().load_as(path, Format::Yaml)?;
    Ok(manifest)
}
