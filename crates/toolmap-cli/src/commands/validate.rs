//! `toolmap validate`: check the tool table and configuration

use anyhow::{Result, bail};
use chrono::Utc;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use toolmap_core::registry::{builtin, validate_tool};
use toolmap_core::{AssemblyStats, SitemapAssembler, ToolRegistry};

use crate::output::{OutputFormat, print_object};
use crate::utils::config;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolStatus {
    id: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationReport {
    tools: Vec<ToolStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<AssemblyStats>,
}

/// Validate every tool individually, then the table as a whole, then report
/// sitemap section counts.
pub fn execute(config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = config::load(config_path)?;
    let table = builtin::tools();

    let tools: Vec<_> = table
        .iter()
        .map(|tool| {
            let result = validate_tool(tool);
            ToolStatus {
                id: tool.id.clone(),
                valid: result.is_ok(),
                error: result.err().map(|e| e.to_string()),
            }
        })
        .collect();

    let registry = ToolRegistry::new(table);
    let stats = registry
        .as_ref()
        .ok()
        .map(|registry| SitemapAssembler::new(registry, &config).assemble_with_stats(Utc::now()).stats);
    let report = ValidationReport { tools, stats };

    if format.is_machine() {
        print_object(&report, format)?;
    } else {
        print_text_report(&report);
    }

    if let Err(e) = registry {
        bail!("tool registry is invalid: {e}");
    }
    Ok(())
}

fn print_text_report(report: &ValidationReport) {
    for tool in &report.tools {
        match &tool.error {
            None => println!("{} {}", "✓".green(), tool.id),
            Some(error) => println!("{} {} {}", "✗".red(), tool.id, error.bright_black()),
        }
    }
    if let Some(stats) = &report.stats {
        println!(
            "\n{} sitemap entries: {} static, {} tool pages, {} popular, {} grid",
            stats.total,
            stats.static_pages,
            stats.tool_pages,
            stats.popular,
            stats.bmi_grid + stats.age_grid + stats.unit_grid
        );
    }
}
