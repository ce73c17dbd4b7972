//! List resolved tasks

use colored::Colorize;
use taskfile_core::TaskSummary;

use crate::context::Context;
use crate::error::Result;

/// Run the list command
pub fn run_list(ctx: &Context, json: bool) -> Result<()> {
    let summaries = ctx.resolver.resolve_tasks(&ctx.dir)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("{}", "No tasks defined.".dimmed());
        return Ok(());
    }

    println!("{}", "Available tasks:".bold());
    for line in format_summaries(&summaries) {
        println!("{line}");
    }

    Ok(())
}

/// Render `* name:  desc` lines with descriptions aligned.
fn format_summaries(summaries: &[TaskSummary]) -> Vec<String> {
    let width = summaries.iter().map(|s| s.task.len() + 1).max().unwrap_or(0);

    summaries
        .iter()
        .map(|summary| {
            let label = format!("{:<width$}", format!("{}:", summary.task));
            if summary.desc.is_empty() {
                format!("* {}", label.trim_end().green())
            } else {
                format!("* {} {}", label.green(), summary.desc)
            }
        })
        .collect()
}
