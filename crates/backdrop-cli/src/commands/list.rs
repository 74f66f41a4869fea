use super::ProjectContext;
use crate::errors::{describe, CommandError};
use crate::logger;
use crate::GlobalOpts;
use backdrop_scan::naming;
use clap::Args;
use colored::*;
use serde::Serialize;

#[derive(Args, Debug, Clone, Default)]
pub struct ListCommand {
    /// Print a JSON array instead of text
    #[arg(long)]
    pub json: bool,
}

/// What `generate` would write for one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentSummary {
    pub title: String,
    pub name: String,
    pub output: String,
    pub source: String,
    pub description: String,
    pub dependencies: Vec<String>,
}

pub fn collect_summaries(ctx: &ProjectContext) -> Result<Vec<ComponentSummary>, CommandError> {
    let generator = ctx.generator();
    let entries = generator.discover()?;

    let mut summaries = Vec::with_capacity(entries.len());
    for entry in &entries {
        match generator.build_item(entry) {
            Ok(item) => summaries.push(ComponentSummary {
                name: naming::manifest_name(&entry.short_name),
                output: ctx.layout.relative_to_root(&generator.output_path(entry)),
                source: ctx.layout.relative_to_root(&entry.path),
                title: item.title,
                description: item.description,
                dependencies: item.dependencies,
            }),
            Err(e) => {
                logger::error(&format!(
                    "Failed to process {}: {}",
                    entry.short_name,
                    describe(&e)
                ));
            }
        }
    }
    Ok(summaries)
}

pub fn handle_list(cmd: ListCommand, opts: &GlobalOpts) -> Result<(), CommandError> {
    let ctx = ProjectContext::load(opts)?;
    let summaries = collect_summaries(&ctx)?;

    if cmd.json {
        let json = serde_json::to_string_pretty(&summaries)
            .map_err(backdrop_manifest::ManifestError::from)?;
        println!("{}", json);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("{}", "No components found".yellow());
        return Ok(());
    }

    for summary in &summaries {
        println!("{} {}", summary.title.bold(), format!("-> {}", summary.output).dimmed());
        println!("  {}", summary.description);
        if !summary.dependencies.is_empty() {
            println!("  {} {}", "deps:".cyan(), summary.dependencies.join(", "));
        }
    }
    println!();
    println!("{} component(s)", summaries.len());
    Ok(())
}
