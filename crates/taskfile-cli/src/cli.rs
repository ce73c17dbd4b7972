//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use taskfile_core::read::DEFAULT_PACKAGE_MANAGER;

/// Taskfile - Inspect the fully resolved Taskfile of a project
#[derive(Parser, Debug)]
#[command(name = "taskfile")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory to start searching for Taskfile.yml from
    #[arg(short, long, global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Platform used to select Taskfile_<platform>.yml (defaults to the host)
    #[arg(long, global = true, env = "TASKFILE_PLATFORM")]
    pub platform: Option<String>,

    /// Package manager that runs package.json scripts
    #[arg(
        long,
        global = true,
        env = "TASKFILE_PACKAGE_MANAGER",
        default_value = DEFAULT_PACKAGE_MANAGER
    )]
    pub package_manager: String,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List resolved tasks with their descriptions
    ///
    /// Examples:
    ///   taskfile list              # Human-readable list
    ///   taskfile list --json       # [{"Task": ..., "Desc": ...}] for editors
    List {
        /// Output as JSON for editor integrations
        #[arg(long)]
        json: bool,
    },

    /// Print the fully merged Taskfile
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },

    /// Create a starter Taskfile.yml in --dir
    Init,
}

/// Formats `show` can print
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Yaml,
    Json,
}
