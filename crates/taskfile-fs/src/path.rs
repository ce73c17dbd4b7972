//! Lexical path helpers
//!
//! None of these touch the filesystem: symlinks are not resolved and paths
//! need not exist. This keeps resolved directories stable across platforms
//! whose temp directories are symlinked (e.g. `/var` on macOS).

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path.
///
/// Drops `.` components, folds `name/..` pairs, and collapses `..` directly
/// under the root. An empty result becomes `.`.
pub fn clean(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        PathBuf::from(".")
    } else {
        out.iter().collect()
    }
}

/// Make `path` absolute against `cwd`, then clean it.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        clean(path)
    } else {
        clean(&cwd.join(path))
    }
}

/// Join `segment` onto `base` and clean the result.
pub fn join_clean(base: &Path, segment: &Path) -> PathBuf {
    clean(&base.join(segment))
}

/// Directory containing `path`; `.` for a bare file name.
pub fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Compute `target` relative to `base`.
///
/// Returns `None` when no lexical relative path exists: one path is absolute
/// and the other is not, they live under different roots, or `base` climbs
/// above its starting point with `..`.
pub fn relative_to(base: &Path, target: &Path) -> Option<PathBuf> {
    let base = clean(base);
    let target = clean(target);
    if base.is_absolute() != target.is_absolute() {
        return None;
    }

    let base_parts: Vec<Component<'_>> = base
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();
    let target_parts: Vec<Component<'_>> = target
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();

    let common = base_parts
        .iter()
        .zip(&target_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for part in &base_parts[common..] {
        match part {
            Component::Normal(_) => relative.push(".."),
            _ => return None,
        }
    }
    for part in &target_parts[common..] {
        relative.push(part);
    }

    if relative.as_os_str().is_empty() {
        Some(PathBuf::from("."))
    } else {
        Some(relative)
    }
}
