//! Folding one manifest into another
//!
//! Tasks are merged with a strict no-shadowing rule: a key that already
//! exists in the destination is a `DuplicateTask` error, whether it came
//! from an include (namespaced) or a platform override (not namespaced).
//! Variables and environment entries use plain override, source wins.

use crate::{Error, Result};

use super::Manifest;

/// Separator between an include namespace and the task name
pub const NAMESPACE_SEPARATOR: &str = ":";

/// Build the key a task takes when merged under `namespace`.
pub fn task_name_with_namespace(name: &str, namespace: Option<&str>) -> String {
    match namespace {
        Some(ns) => format!("{ns}{NAMESPACE_SEPARATOR}{name}"),
        None => name.to_string(),
    }
}

impl Manifest {
    /// Merge `other` into this manifest, optionally prefixing its task keys
    /// with `namespace`.
    ///
    /// Task keys are all checked before any is inserted, so on error the
    /// task map is left as it was. Include declarations of `other` are
    /// never carried over.
    pub fn merge(&mut self, other: Manifest, namespace: Option<&str>) -> Result<()> {
        if !other.version.is_empty() && !self.version.is_empty() && other.version != self.version
        {
            tracing::warn!(
                namespace = namespace.unwrap_or(""),
                expected = %self.version,
                found = %other.version,
                "Merging Taskfiles with different versions"
            );
        }

        let renamed: Vec<_> = other
            .tasks
            .into_iter()
            .map(|(name, task)| (task_name_with_namespace(&name, namespace), task))
            .collect();

        if let Some((name, _)) = renamed.iter().find(|(name, _)| self.tasks.contains_key(name)) {
            return Err(Error::DuplicateTask { name: name.clone() });
        }

        for (key, value) in other.vars {
            self.vars.insert(key, value);
        }
        for (key, value) in other.env {
            self.env.insert(key, value);
        }
        for (name, task) in renamed {
            tracing::trace!(task = %name, "Merged task");
            self.tasks.insert(name, task);
        }

        Ok(())
    }
}
