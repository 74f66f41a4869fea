//! Compare committed manifests with what a fresh run would write
//!
//! Nothing is written. Every component is rendered in memory and compared
//! byte-for-byte with the file on disk; JSON files in the output directory
//! that no component produces are reported as orphaned.

use super::ProjectContext;
use crate::errors::{describe, CommandError};
use crate::generator::ComponentFailure;
use crate::logger;
use crate::GlobalOpts;
use colored::*;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Result of comparing the registry on disk with the sources
#[derive(Debug, Default)]
pub struct CheckReport {
    pub up_to_date: Vec<String>,
    pub stale: Vec<String>,
    pub missing: Vec<String>,
    pub orphaned: Vec<PathBuf>,
    pub failures: Vec<ComponentFailure>,
}

impl CheckReport {
    pub fn problem_count(&self) -> usize {
        self.stale.len() + self.missing.len() + self.orphaned.len() + self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.problem_count() == 0
    }
}

pub fn handle_check(opts: &GlobalOpts) -> Result<CheckReport, CommandError> {
    let ctx = ProjectContext::load(opts)?;
    let report = build_report(&ctx)?;
    print_report(&ctx, &report);

    if report.is_clean() {
        logger::success(&format!(
            "Registry is up to date ({} component(s))",
            report.up_to_date.len()
        ));
        Ok(report)
    } else {
        Err(CommandError::Drift(report.problem_count()))
    }
}

pub fn build_report(ctx: &ProjectContext) -> Result<CheckReport, CommandError> {
    let generator = ctx.generator();
    let entries = generator.discover()?;

    let mut report = CheckReport::default();
    let mut expected: HashSet<PathBuf> = HashSet::new();

    for entry in &entries {
        let output_path = generator.output_path(entry);
        expected.insert(output_path.clone());

        let rendered = match generator
            .build_item(entry)
            .map_err(|e| describe(&e))
            .and_then(|item| backdrop_manifest::render(&item).map_err(|e| describe(&e)))
        {
            Ok(rendered) => rendered,
            Err(message) => {
                logger::error(&format!("Failed to process {}: {}", entry.short_name, message));
                report.failures.push(ComponentFailure {
                    name: entry.short_name.clone(),
                    message,
                });
                continue;
            }
        };

        match fs::read_to_string(&output_path) {
            Ok(on_disk) if on_disk == rendered => {
                report.up_to_date.push(entry.short_name.clone());
            }
            Ok(_) => report.stale.push(entry.short_name.clone()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                report.missing.push(entry.short_name.clone());
            }
            Err(e) => {
                logger::error(&format!(
                    "Failed to read {}: {}",
                    ctx.layout.relative_to_root(&output_path),
                    e
                ));
                report.failures.push(ComponentFailure {
                    name: entry.short_name.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    report.orphaned = find_orphans(&ctx.layout.output_dir, &expected)?;
    Ok(report)
}

fn find_orphans(
    output_dir: &Path,
    expected: &HashSet<PathBuf>,
) -> Result<Vec<PathBuf>, CommandError> {
    if !output_dir.is_dir() {
        return Ok(Vec::new());
    }

    let listing = fs::read_dir(output_dir).map_err(|source| CommandError::OutputListing {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut orphans: Vec<PathBuf> = listing
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .filter(|path| !expected.contains(path))
        .collect();
    orphans.sort();
    Ok(orphans)
}

fn print_report(ctx: &ProjectContext, report: &CheckReport) {
    for name in &report.up_to_date {
        logger::debug(&format!("{} is up to date", name));
    }
    for name in &report.stale {
        println!("  {} {}", "stale".yellow(), name);
    }
    for name in &report.missing {
        println!("  {} {}", "missing".red(), name);
    }
    for path in &report.orphaned {
        println!("  {} {}", "orphaned".cyan(), ctx.layout.relative_to_root(path));
    }
    for failure in &report.failures {
        println!("  {} {}: {}", "failed".red().bold(), failure.name, failure.message);
    }
}
