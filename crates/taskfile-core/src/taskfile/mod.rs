//! Taskfile data model and merging
//!
//! A [`Manifest`] holds tasks, variables and include declarations. Manifests
//! are combined with [`Manifest::merge`], which namespaces task keys and
//! refuses to shadow existing tasks.

mod manifest;
mod merge;
mod task;
mod var;

pub use manifest::{Includes, Manifest, Tasks, Vars};
pub use merge::{NAMESPACE_SEPARATOR, task_name_with_namespace};
pub use task::{Cmd, Dep, Task, TaskSummary};
pub use var::Var;
