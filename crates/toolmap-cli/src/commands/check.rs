//! `toolmap check`: audit an existing sitemap against a fresh assembly

use anyhow::{Context, Result, bail};
use colored::Colorize;
use std::fs;
use std::path::Path;
use toolmap_core::sitemap::{audit, fetch_sitemap, is_sitemap_index, parse_sitemap, parse_sitemap_index};
use toolmap_core::{SitemapAssembler, SitemapAudit, SitemapEntry};

use crate::cli::CheckArgs;
use crate::output::print_object;
use crate::utils::config;

/// Most URLs listed per direction in text output.
const TEXT_PREVIEW: usize = 20;

/// Load the target sitemap, compare and report. Fails when the sets differ.
pub async fn execute(config_path: Option<&Path>, args: &CheckArgs, quiet: bool) -> Result<()> {
    let config = config::load_with_site_overrides(config_path, args.base_url.as_deref(), None)?;
    let registry = super::builtin_registry()?;
    let expected = SitemapAssembler::new(&registry, &config).assemble();

    let actual = if is_remote(&args.target) {
        fetch_sitemap(&args.target)
            .await
            .with_context(|| format!("Failed to fetch {}", args.target))?
    } else {
        read_local(Path::new(&args.target))?
    };

    let report = audit(&expected, &actual);
    let format = args.format.resolve();
    if format.is_machine() {
        print_object(&report, format)?;
    } else if !quiet || !report.is_clean() {
        print_text_report(&args.target, &report);
    }

    if !report.is_clean() {
        bail!(
            "sitemap differs from assembly: {} missing, {} unexpected",
            report.missing.len(),
            report.unexpected.len()
        );
    }
    Ok(())
}

fn is_remote(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}

/// Read a sitemap file; an index is resolved against sibling files by name.
fn read_local(path: &Path) -> Result<Vec<SitemapEntry>> {
    let xml = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    if !is_sitemap_index(&xml) {
        return Ok(parse_sitemap(&xml)?);
    }

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut entries = Vec::new();
    for loc in parse_sitemap_index(&xml)? {
        let name = loc.rsplit('/').next().unwrap_or(loc.as_str());
        let child = dir.join(name);
        let child_xml = fs::read_to_string(&child)
            .with_context(|| format!("Failed to read child sitemap {}", child.display()))?;
        entries.extend(parse_sitemap(&child_xml)?);
    }
    Ok(entries)
}

fn print_text_report(target: &str, report: &SitemapAudit) {
    if report.is_clean() {
        println!("{} {} matches ({} URLs)", "✓".green(), target, report.checked);
        return;
    }
    println!("{} {} differs from assembly", "✗".red(), target);
    print_section("missing", &report.missing);
    print_section("unexpected", &report.unexpected);
}

fn print_section(label: &str, urls: &[String]) {
    if urls.is_empty() {
        return;
    }
    println!("  {} {}", urls.len(), label.yellow());
    for url in urls.iter().take(TEXT_PREVIEW) {
        println!("    {url}");
    }
    if urls.len() > TEXT_PREVIEW {
        println!("    {}", format!("... and {} more", urls.len() - TEXT_PREVIEW).bright_black());
    }
}
