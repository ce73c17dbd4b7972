//! Tasks and commands

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::Var;

/// A named unit of work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Final task name, stamped from the owning map key once resolution
    /// finishes. Never read from documents.
    #[serde(rename = "task", skip_deserializing, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub desc: String,

    /// Working directory; empty means "inherit".
    #[serde(default, skip_serializing_if = "path_is_empty")]
    pub dir: PathBuf,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cmds: Vec<Cmd>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deps: Vec<Dep>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub vars: BTreeMap<String, Var>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, Var>,
}

impl Task {
    /// Whether the task declares its own working directory.
    pub fn has_dir(&self) -> bool {
        !path_is_empty(&self.dir)
    }
}

fn path_is_empty(path: &Path) -> bool {
    path.as_os_str().is_empty()
}

/// One executable step of a task.
///
/// Decodes from a bare string, a `{ cmd: ... }` map, or a sub-task call
/// `{ task: ..., vars: ... }`. Sub-task calls are carried through untouched
/// for the executor; resolution only ever creates shell commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawCmd")]
pub struct Cmd {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cmd: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub task: String,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub vars: BTreeMap<String, Var>,
}

impl Cmd {
    /// A shell command.
    pub fn new(cmd: impl Into<String>) -> Self {
        Self {
            cmd: cmd.into(),
            ..Self::default()
        }
    }

    /// A call to another task by name.
    pub fn call(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            ..Self::default()
        }
    }

    pub fn is_task_call(&self) -> bool {
        !self.task.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCmd {
    Line(String),
    Full {
        #[serde(default)]
        cmd: String,
        #[serde(default)]
        task: String,
        #[serde(default)]
        vars: BTreeMap<String, Var>,
    },
}

impl From<RawCmd> for Cmd {
    fn from(raw: RawCmd) -> Self {
        match raw {
            RawCmd::Line(cmd) => Self::new(cmd),
            RawCmd::Full { cmd, task, vars } => Self { cmd, task, vars },
        }
    }
}

/// A task that must run first.
///
/// Decodes from a bare task name or a `{ task: ..., vars: ... }` map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDep")]
pub struct Dep {
    pub task: String,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub vars: BTreeMap<String, Var>,
}

impl Dep {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            vars: BTreeMap::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDep {
    Name(String),
    Call {
        task: String,
        #[serde(default)]
        vars: BTreeMap<String, Var>,
    },
}

impl From<RawDep> for Dep {
    fn from(raw: RawDep) -> Self {
        match raw {
            RawDep::Name(task) => Self::new(task),
            RawDep::Call { task, vars } => Self { task, vars },
        }
    }
}

/// Name and description of a resolved task, as listed to editors and users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    #[serde(rename = "Task")]
    pub task: String,
    #[serde(rename = "Desc")]
    pub desc: String,
}
