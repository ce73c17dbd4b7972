//! The Taskfile manifest document

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::task::{Task, TaskSummary};
use super::var::{Var, scalar_string};

/// Include declarations: namespace -> path relative to the declaring manifest
pub type Includes = BTreeMap<String, PathBuf>;

/// Variables keyed by name
pub type Vars = BTreeMap<String, Var>;

/// Tasks keyed by name
pub type Tasks = BTreeMap<String, Task>;

/// A Taskfile, as decoded from disk or synthesized.
///
/// Every map is ordered so iteration (and therefore include processing and
/// error reporting) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Format version tag
    #[serde(default, deserialize_with = "scalar_string")]
    pub version: String,

    /// Only meaningful on the root manifest; an included manifest must
    /// leave this empty.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub includes: Includes,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub vars: Vars,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: Vars,

    #[serde(default)]
    pub tasks: Tasks,
}

impl Manifest {
    /// Create an empty manifest with the given version tag.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Self::default()
        }
    }

    /// Set every task's name to its key in the task map.
    pub fn stamp_task_names(&mut self) {
        for (name, task) in &mut self.tasks {
            task.name = name.clone();
        }
    }

    /// Name and description of every task, sorted by name.
    pub fn summaries(&self) -> Vec<TaskSummary> {
        self.tasks
            .iter()
            .map(|(name, task)| TaskSummary {
                task: name.clone(),
                desc: task.desc.clone(),
            })
            .collect()
    }
}
