use super::ProjectContext;
use crate::errors::CommandError;
use crate::generator::GenerateSummary;
use crate::logger;
use crate::GlobalOpts;
use clap::Args;
use colored::*;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateCommand {
    /// Components root to scan instead of the configured one
    #[arg(long)]
    pub components_dir: Option<PathBuf>,

    /// Directory to write manifests to instead of the configured one
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

pub fn handle_generate(
    cmd: GenerateCommand,
    opts: &GlobalOpts,
) -> Result<GenerateSummary, CommandError> {
    let mut ctx = ProjectContext::load(opts)?;

    if let Some(dir) = cmd.components_dir.as_deref() {
        ctx.layout = ctx.layout.with_components_dir(dir);
    }
    if let Some(dir) = cmd.output_dir.as_deref() {
        ctx.layout = ctx.layout.with_output_dir(dir);
    }

    let summary = ctx.generator().generate()?;

    if !summary.failures.is_empty() {
        logger::warn(&format!(
            "{} component(s) could not be processed",
            summary.failures.len()
        ));
    }

    println!(
        "{}",
        format!("Successfully processed {} components!", summary.processed)
            .green()
            .bold()
    );

    Ok(summary)
}
