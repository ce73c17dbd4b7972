//! Taskfile CLI
//!
//! Resolves a project's Taskfile (includes, script lists and platform
//! overrides) and prints the result.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use context::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    let Some(command) = cli.command.clone() else {
        // No command provided - show help hint
        println!("{} Taskfile resolver", "taskfile".green().bold());
        println!();
        println!("Run {} for available commands.", "taskfile --help".cyan());
        return Ok(());
    };

    let ctx = Context::from_cli(&cli)?;
    match command {
        Commands::List { json } => commands::run_list(&ctx, json),
        Commands::Show { format } => commands::run_show(&ctx, format),
        Commands::Init => commands::run_init(&ctx.absolute_dir()),
    }
}
