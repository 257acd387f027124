//! Config resolution for commands.

use anyhow::{Context, Result};
use std::path::Path;
use toolmap_core::Config;

/// Load config from `--config`/`TOOLMAP_CONFIG` when given, else from the
/// platform config directory (defaults if absent).
pub fn load(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Config::load().context("Failed to load config"),
    }
}

/// Load config like [`load`], apply per-command site overrides, then
/// validate once so a flag can replace a bad value from the file.
pub fn load_with_site_overrides(
    path: Option<&Path>,
    base_url: Option<&str>,
    max_per_file: Option<usize>,
) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_unvalidated(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load_unvalidated().context("Failed to load config")?,
    };
    with_site_overrides(config, base_url, max_per_file)
}

fn with_site_overrides(
    mut config: Config,
    base_url: Option<&str>,
    max_per_file: Option<usize>,
) -> Result<Config> {
    if let Some(base_url) = base_url {
        config.site.base_url = base_url.to_string();
    }
    if let Some(max) = max_per_file {
        config.site.max_urls_per_file = max;
    }
    config.validate().context("Invalid site settings")?;
    Ok(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_are_validated() {
        let config =
            with_site_overrides(Config::default(), Some("https://calc.example.com/"), Some(10))
                .unwrap();
        assert_eq!(config.site.base_url, "https://calc.example.com");
        assert_eq!(config.site.max_urls_per_file, 10);

        assert!(with_site_overrides(Config::default(), Some("nope"), None).is_err());
        assert!(with_site_overrides(Config::default(), None, Some(0)).is_err());
    }

    #[test]
    fn test_flag_replaces_invalid_base_url_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[site]\nbase_url = \"ftp://old.example.com\"\n").unwrap();

        assert!(load(Some(&path)).is_err());
        assert!(load_with_site_overrides(Some(&path), None, None).is_err());
        let config =
            load_with_site_overrides(Some(&path), Some("https://calc.example.com"), None).unwrap();
        assert_eq!(config.site.base_url, "https://calc.example.com");
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let err = load(Some(Path::new("/no/such/toolmap.toml"))).unwrap_err();
        assert!(err.to_string().contains("/no/such/toolmap.toml"));
    }
}
