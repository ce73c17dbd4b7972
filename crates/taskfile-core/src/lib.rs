//! Taskfile manifest resolution
//!
//! This crate turns a directory into one consolidated Taskfile:
//!
//! - **Decoding**: YAML Taskfiles and `package.json` script lists
//! - **Includes**: one level of namespaced includes, with task working
//!   directories re-rooted to stay correct after the merge
//! - **Platform overrides**: `Taskfile_<platform>.yml` merged alongside the
//!   root tasks
//! - **Merging**: task maps folded together without ever shadowing a task
//!
//! Executing tasks, expanding variables and scheduling dependencies are left
//! to consumers of the resolved [`Manifest`].
//!
//! # Example
//!
//! ```no_run
//! use taskfile_core::{ResolveOptions, Resolver};
//!
//! let options = ResolveOptions::from_env()?;
//! let resolver = Resolver::new(options);
//! let manifest = resolver.resolve(std::path::Path::new("."))?;
//! for (name, task) in &manifest.tasks {
//!     println!("{name}: {}", task.desc);
//! }
//! # Ok::<(), taskfile_core::Error>(())
//! ```

pub mod error;
pub mod read;
pub mod taskfile;

pub use error::{Error, Result};
pub use read::{
    ManifestLocator, PROJECT_ROOT_VAR, ResolveOptions, Resolver, UpwardSearch, read_package_json,
    read_taskfile,
};
pub use taskfile::{Cmd, Dep, Manifest, Task, TaskSummary, Var};
