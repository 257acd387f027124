//! `toolmap sitemap`: assemble and write the sitemap

use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use toolmap_core::sitemap::{render_files, write_urlset};
use toolmap_core::{AssemblyStats, SitemapAssembler};
use tracing::info;

use crate::cli::SitemapArgs;
use crate::output::{OutputFormat, print_list, print_object};
use crate::utils::config;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WriteReport {
    base_url: String,
    files: Vec<PathBuf>,
    stats: AssemblyStats,
}

/// Assemble entries and either write the file set or print to stdout.
pub fn execute(config_path: Option<&Path>, args: &SitemapArgs, quiet: bool) -> Result<()> {
    let config = config::load_with_site_overrides(
        config_path,
        args.base_url.as_deref(),
        args.max_per_file,
    )?;
    let registry = super::builtin_registry()?;
    let now = Utc::now();
    let assembly = SitemapAssembler::new(&registry, &config).assemble_with_stats(now);
    let format = args.format.resolve();

    if args.stdout {
        return match format {
            OutputFormat::Text => {
                print!("{}", write_urlset(&assembly.entries)?);
                Ok(())
            },
            _ => print_list(&assembly.entries, format),
        };
    }

    let file_name = args
        .out
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("--out must name a file, got {}", args.out.display()))?;
    let dir = args
        .out
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let files = render_files(
        &assembly.entries,
        &config.site.base_url,
        file_name,
        config.site.max_urls_per_file,
        now,
    )?;
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(&file.name);
        fs::write(&path, file.xml).with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote sitemap file");
        written.push(path);
    }

    let report = WriteReport {
        base_url: config.site.base_url.clone(),
        files: written,
        stats: assembly.stats,
    };
    if format.is_machine() {
        return print_object(&report, format);
    }
    if !quiet {
        print_text_report(&report);
    }
    Ok(())
}

fn print_text_report(report: &WriteReport) {
    let stats = &report.stats;
    println!(
        "{} {} URLs for {}",
        "✓".green(),
        stats.total,
        report.base_url.bold()
    );
    println!("  static pages   {}", stats.static_pages);
    println!("  tool pages     {}", stats.tool_pages);
    println!("  popular        {}", stats.popular);
    println!(
        "  grids          {} (bmi {}, age {}, unit {})",
        stats.bmi_grid + stats.age_grid + stats.unit_grid,
        stats.bmi_grid,
        stats.age_grid,
        stats.unit_grid
    );
    for path in &report.files {
        println!("  {} {}", "wrote".bright_black(), path.display());
    }
}
