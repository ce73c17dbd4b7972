//! Building a resolver from global CLI flags

use std::path::PathBuf;

use taskfile_core::{ResolveOptions, Resolver};

use crate::cli::Cli;
use crate::error::Result;

/// Everything a command needs to resolve the Taskfile.
pub struct Context {
    pub resolver: Resolver,
    /// Start directory, as given on the command line
    pub dir: PathBuf,
}

impl Context {
    /// Build the context from parsed flags and the real process environment.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut options =
            ResolveOptions::from_env()?.with_package_manager(cli.package_manager.clone());
        if let Some(platform) = &cli.platform {
            options = options.with_platform(platform.clone());
        }
        tracing::debug!(?options, dir = %cli.dir.display(), "Resolve options");

        Ok(Self {
            resolver: Resolver::new(options),
            dir: cli.dir.clone(),
        })
    }

    /// Start directory made absolute against the working directory.
    pub fn absolute_dir(&self) -> PathBuf {
        taskfile_fs::path::absolutize(&self.dir, &self.resolver.options().cwd)
    }
}
