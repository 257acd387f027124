//! Lookup command implementation for searching the registry

use anyhow::Result;
use colored::Colorize;

use crate::output::{OutputFormat, print_list};

/// Fuzzy-search the registry and print up to `limit` matches.
pub fn execute(query: &str, limit: usize, format: OutputFormat, quiet: bool) -> Result<()> {
    let registry = super::builtin_registry()?;
    let results: Vec<_> = registry.search(query).into_iter().take(limit).collect();

    if format.is_machine() {
        let out: Vec<_> = results
            .iter()
            .map(|r| {
                serde_json::json!({
                    "id": r.tool.id,
                    "name": r.tool.name,
                    "category": r.tool.category,
                    "description": r.tool.description,
                    "indexPath": r.tool.index_path(),
                    "score": r.score,
                    "matchField": r.match_field,
                })
            })
            .collect();
        return print_list(&out, format);
    }

    if results.is_empty() {
        if !quiet {
            println!("No tools match '{query}'");
        }
        return Ok(());
    }

    println!(
        "Found {} match{}:\n",
        results.len(),
        if results.len() == 1 { "" } else { "es" }
    );
    for (i, result) in results.iter().enumerate() {
        println!("{}. {}", i + 1, result.tool);
        println!(
            "   {} {}\n",
            result.tool.index_path().bright_black(),
            format!("(matched {})", result.match_field).bright_black()
        );
    }
    Ok(())
}
