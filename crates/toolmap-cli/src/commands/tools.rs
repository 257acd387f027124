//! `toolmap tools`: list the registry

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use toolmap_core::enumerate::popular_paths;
use toolmap_core::ToolConfig;

use crate::output::{OutputFormat, print_list};
use crate::utils::config;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolRow<'a> {
    id: &'a str,
    name: &'a str,
    category: &'a str,
    description: &'a str,
    index_path: String,
    templates: Vec<&'a str>,
    /// Size of the untruncated popular walk
    popular_available: usize,
    /// Entries the sitemap takes at the configured limit
    popular_in_sitemap: usize,
}

fn row(tool: &ToolConfig, limit: usize) -> ToolRow<'_> {
    let available = popular_paths(tool).count();
    ToolRow {
        id: &tool.id,
        name: &tool.name,
        category: &tool.category,
        description: &tool.description,
        index_path: tool.index_path(),
        templates: tool.url_templates.iter().map(|t| t.path.as_str()).collect(),
        popular_available: available,
        popular_in_sitemap: available.min(limit),
    }
}

/// List registered tools in registry order.
pub fn execute(config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = config::load(config_path)?;
    let registry = super::builtin_registry()?;
    let rows: Vec<_> = registry
        .all_configs()
        .iter()
        .map(|tool| row(tool, config.site.popular_limit))
        .collect();

    if format.is_machine() {
        return print_list(&rows, format);
    }

    println!("{} tools:\n", rows.len());
    for row in &rows {
        println!(
            "  {:<22} {:<24} {}",
            row.id.green(),
            row.name,
            format!("[{}]", row.category).bright_black()
        );
        if row.popular_available > 0 {
            println!(
                "  {:<22} {} popular URLs ({} in sitemap)",
                "",
                row.popular_available,
                row.popular_in_sitemap
            );
        }
    }
    Ok(())
}
