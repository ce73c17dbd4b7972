//! Print the merged Taskfile

use crate::cli::OutputFormat;
use crate::context::Context;
use crate::error::Result;

/// Run the show command
pub fn run_show(ctx: &Context, format: OutputFormat) -> Result<()> {
    let manifest = ctx.resolver.resolve(&ctx.dir)?;

    let rendered = match format {
        OutputFormat::Yaml => serde_yaml::to_string(&manifest)?,
        OutputFormat::Json => serde_json::to_string_pretty(&manifest)?,
    };
    println!("{}", rendered.trim_end());

    Ok(())
}
