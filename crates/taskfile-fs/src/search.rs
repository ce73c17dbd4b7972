//! Upward manifest search

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Look for `file_name` in `start` and then in each of its ancestors.
///
/// Returns the path of the first match, built by joining the directory the
/// walk reached with `file_name`, so a relative `start` yields a relative
/// result. Returns `Ok(None)` when the walk reaches the root without a hit.
pub fn search_upward(start: &Path, file_name: &str) -> Result<Option<PathBuf>> {
    let mut dir = Some(start);
    while let Some(current) = dir {
        let candidate = current.join(file_name);
        match std::fs::metadata(&candidate) {
            Ok(meta) if meta.is_file() => {
                tracing::debug!(path = %candidate.display(), "Found manifest");
                return Ok(Some(candidate));
            }
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(Error::io(candidate, e)),
        }
        dir = parent_of(current);
    }

    tracing::debug!(start = %start.display(), file_name, "No manifest found in any ancestor");
    Ok(None)
}

/// Parent directory, treating `""` (the parent of a bare relative name) as `.`.
fn parent_of(dir: &Path) -> Option<&Path> {
    match dir.parent() {
        Some(parent) if parent.as_os_str().is_empty() => {
            if dir == Path::new(".") {
                None
            } else {
                Some(Path::new("."))
            }
        }
        other => other,
    }
}
