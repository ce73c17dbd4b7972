//! Reading Taskfiles from disk
//!
//! - [`read_taskfile`] decodes a native YAML manifest
//! - [`read_package_json`] synthesizes a manifest from a script list
//! - [`Resolver`] locates the root Taskfile and merges everything together

mod decode;
mod locator;
mod options;
mod package_json;
mod resolver;

pub use decode::read_taskfile;
pub use locator::{ManifestLocator, UpwardSearch};
pub use options::{DEFAULT_PACKAGE_MANAGER, ResolveOptions, current_platform};
pub use package_json::{SCRIPT_LIST_VERSION, read_package_json};
pub use resolver::{PROJECT_ROOT_VAR, Resolver};
