#![allow(missing_docs, clippy::expect_used, clippy::unwrap_used)]

mod common;

use common::{toolmap_cmd, write_config};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;
use toolmap_core::sitemap::{is_sitemap_index, parse_sitemap, write_urlset};
use toolmap_core::{Config, SitemapAssembler, SitemapEntry, ToolRegistry};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BASE: &str = "https://calc.example.com";

fn expected_entries() -> Vec<SitemapEntry> {
    let registry = ToolRegistry::builtin().unwrap();
    let mut config = Config::default();
    config.site.base_url = BASE.to_string();
    SitemapAssembler::new(&registry, &config).assemble()
}

#[test]
fn sitemap_writes_single_file() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let out = dir.path().join("public").join("sitemap.xml");

    let output = toolmap_cmd()
        .args(["sitemap", "--base-url", BASE, "-f", "json", "--out"])
        .arg(&out)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report: Value = serde_json::from_slice(&output)?;
    assert_eq!(report["baseUrl"], BASE);
    assert_eq!(report["files"].as_array().unwrap().len(), 1);

    let xml = std::fs::read_to_string(&out)?;
    let entries = parse_sitemap(&xml)?;
    assert_eq!(entries.len() as u64, report["stats"]["total"].as_u64().unwrap());
    assert_eq!(entries[0].url, format!("{BASE}/"));
    Ok(())
}

#[test]
fn sitemap_splits_into_index() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let out = dir.path().join("sitemap.xml");

    toolmap_cmd()
        .args(["sitemap", "--base-url", BASE, "--max-per-file", "500", "-f", "text"])
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("sitemap-1.xml"));

    let index = std::fs::read_to_string(&out)?;
    assert!(is_sitemap_index(&index));
    assert!(index.contains(&format!("<loc>{BASE}/sitemap-1.xml</loc>")));
    let first = std::fs::read_to_string(dir.path().join("sitemap-1.xml"))?;
    assert_eq!(parse_sitemap(&first)?.len(), 500);
    Ok(())
}

#[test]
fn sitemap_stdout_prints_xml() {
    toolmap_cmd()
        .args(["sitemap", "--stdout", "--base-url", BASE, "-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<?xml"))
        .stdout(predicate::str::contains(
            "<loc>https://calc.example.com/tools/bmi-calculator/140/40</loc>",
        ));
}

#[test]
fn sitemap_rejects_bad_base_url() {
    let dir = tempdir().unwrap();
    toolmap_cmd()
        .current_dir(dir.path())
        .args(["sitemap", "--base-url", "ftp://calc.example.com", "-f", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid site settings"));
}

#[test]
fn sitemap_base_url_flag_overrides_bad_config_value() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), "[site]\nbase_url = \"ftp://old.example.com\"\n");

    toolmap_cmd()
        .arg("--config")
        .arg(&config)
        .args(["sitemap", "--stdout", "-f", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid site settings"));

    toolmap_cmd()
        .arg("--config")
        .arg(&config)
        .args(["sitemap", "--stdout", "--base-url", BASE, "-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("<loc>{BASE}/</loc>")));
}

#[test]
fn check_accepts_freshly_written_sitemap() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("sitemap.xml");
    toolmap_cmd()
        .args(["sitemap", "--base-url", BASE, "--max-per-file", "1000", "-q", "--out"])
        .arg(&out)
        .assert()
        .success();

    let output = toolmap_cmd()
        .arg("check")
        .arg(&out)
        .args(["--base-url", BASE, "-f", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["missing"], serde_json::json!([]));
    assert_eq!(report["unexpected"], serde_json::json!([]));
}

#[tokio::test]
async fn check_reports_drift_on_remote_sitemap() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let mut deployed: Vec<_> = expected_entries().into_iter().skip(1).collect();
    deployed.push(SitemapEntry::bare(format!("{BASE}/tools/retired-tool")));

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(write_urlset(&deployed)?))
        .mount(&server)
        .await;

    let output = toolmap_cmd()
        .args(["check", &format!("{}/sitemap.xml", server.uri())])
        .args(["--base-url", BASE, "-f", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 missing, 1 unexpected"))
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output)?;
    assert_eq!(report["missing"], serde_json::json!([format!("{BASE}/")]));
    assert_eq!(
        report["unexpected"],
        serde_json::json!([format!("{BASE}/tools/retired-tool")])
    );
    Ok(())
}
