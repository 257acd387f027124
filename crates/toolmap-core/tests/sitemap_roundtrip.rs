#![allow(clippy::unwrap_used)]

use chrono::{TimeZone, Utc};
use tempfile::TempDir;
use toolmap_core::sitemap::{audit, is_sitemap_index, parse_sitemap, parse_sitemap_index, render_files};
use toolmap_core::{Config, SitemapAssembler, ToolRegistry};

fn assemble(config: &Config) -> Vec<toolmap_core::SitemapEntry> {
    let registry = ToolRegistry::builtin().unwrap();
    let now = Utc.with_ymd_and_hms(2024, 5, 20, 8, 0, 0).unwrap();
    SitemapAssembler::new(&registry, config).assemble_at(now)
}

#[test]
fn test_written_sitemap_audits_clean() {
    let config = Config::default();
    let entries = assemble(&config);

    let files = render_files(
        &entries,
        &config.site.base_url,
        "sitemap.xml",
        config.site.max_urls_per_file,
        Utc::now(),
    )
    .unwrap();
    assert_eq!(files.len(), 1);

    let parsed = parse_sitemap(&files[0].xml).unwrap();
    assert_eq!(parsed.len(), entries.len());
    assert!(audit(&entries, &parsed).is_clean());
}

#[test]
fn test_split_files_reassemble_to_same_urls() {
    let mut config = Config::default();
    config.site.max_urls_per_file = 1_000;
    let entries = assemble(&config);

    let temp = TempDir::new().unwrap();
    let files = render_files(&entries, &config.site.base_url, "sitemap.xml", 1_000, Utc::now())
        .unwrap();
    for file in &files {
        std::fs::write(temp.path().join(&file.name), &file.xml).unwrap();
    }

    let index = std::fs::read_to_string(temp.path().join("sitemap.xml")).unwrap();
    assert!(is_sitemap_index(&index));
    let children = parse_sitemap_index(&index).unwrap();
    assert_eq!(children.len(), entries.len().div_ceil(1_000));

    let mut collected = Vec::new();
    for child in children {
        let name = child.rsplit('/').next().unwrap();
        let xml = std::fs::read_to_string(temp.path().join(name)).unwrap();
        collected.extend(parse_sitemap(&xml).unwrap());
    }
    let urls: Vec<_> = collected.iter().map(|e| e.url.as_str()).collect();
    let expected: Vec<_> = entries.iter().map(|e| e.url.as_str()).collect();
    assert_eq!(urls, expected);
}

#[test]
fn test_audit_detects_drift() {
    let config = Config::default();
    let expected = assemble(&config);

    let mut deployed: Vec<_> = expected.iter().skip(1).cloned().collect();
    deployed.push(toolmap_core::SitemapEntry::bare(format!(
        "{}/tools/retired-tool",
        config.site.base_url
    )));

    let report = audit(&expected, &deployed);
    assert_eq!(report.missing, vec![format!("{}/", config.site.base_url)]);
    assert_eq!(
        report.unexpected,
        vec![format!("{}/tools/retired-tool", config.site.base_url)]
    );
}
