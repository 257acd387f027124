//! `toolmap urls`: popular URLs for one tool

use anyhow::Result;
use std::path::Path;
use toolmap_core::UrlEnumerator;
use toolmap_core::sitemap::absolute_url;
use tracing::warn;

use crate::output::{OutputFormat, print_list};
use crate::utils::config;

/// Print up to `limit` popular URLs for `tool_id`.
///
/// An unknown tool prints an empty list and a warning, and still succeeds.
pub fn execute(
    config_path: Option<&Path>,
    tool_id: &str,
    limit: Option<usize>,
    absolute: bool,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let config = config::load(config_path)?;
    let registry = super::builtin_registry()?;
    let limit = limit.unwrap_or(config.site.popular_limit);

    if registry.find_config(tool_id).is_none() && !quiet {
        warn!(tool_id, "unknown tool; run `toolmap tools` to list identifiers");
    }

    let mut urls = UrlEnumerator::new(&registry).generate_popular_urls(tool_id, limit);
    if absolute {
        urls = urls
            .iter()
            .map(|path| absolute_url(&config.site.base_url, path))
            .collect();
    }

    if format.is_machine() {
        return print_list(&urls, format);
    }
    for url in &urls {
        println!("{url}");
    }
    Ok(())
}
