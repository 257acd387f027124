//! Configuration for sitemap generation.
//!
//! Settings are stored in TOML. Every field has a default, so a missing file
//! or a partial file both work.
//!
//! ## Configuration Hierarchy
//!
//! 1. **Defaults** compiled into the binary
//! 2. **Config file**: `--config <FILE>` / `TOOLMAP_CONFIG`, otherwise the
//!    platform config directory (`config.toml`)
//! 3. **Environment variables**: `TOOLMAP_BASE_URL`, `TOOLMAP_POPULAR_LIMIT`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [site]
//! base_url = "https://calc.example.com"
//! popular_limit = 50
//! max_urls_per_file = 50000
//!
//! [grids.bmi]
//! height = { start = 140, end = 210, step = 5 }
//! weight = { start = 40, end = 150, step = 5 }
//!
//! [grids.unit]
//! max_exponent = 10
//!
//! [sections.popular]
//! changefreq = "weekly"
//! priority = 0.7
//! ```

use crate::sitemap::ChangeFrequency;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Sitemap protocol cap on URLs per file.
pub const PROTOCOL_MAX_URLS: usize = 50_000;

/// Largest power-of-two exponent accepted for the unit-converter grid.
const MAX_UNIT_EXPONENT: u32 = 30;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-wide settings
    pub site: SiteConfig,
    /// Inline grid ranges
    pub grids: GridConfig,
    /// Change frequency and priority per sitemap section
    pub sections: SectionsConfig,
}

/// Site-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scheme and host prepended to every path, without a trailing slash.
    pub base_url: String,
    /// Popular paths generated per tool.
    pub popular_limit: usize,
    /// URLs per sitemap file before splitting into an index.
    pub max_urls_per_file: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://toolmap.dev".to_string(),
            popular_limit: crate::enumerate::DEFAULT_POPULAR_LIMIT,
            max_urls_per_file: PROTOCOL_MAX_URLS,
        }
    }
}

/// Inclusive integer range walked with a fixed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRange {
    /// First value
    pub start: i64,
    /// Last value (inclusive, reached only if on the step)
    pub end: i64,
    /// Positive increment
    pub step: i64,
}

impl StepRange {
    /// Create a range.
    pub const fn new(start: i64, end: i64, step: i64) -> Self {
        Self { start, end, step }
    }

    /// Values of the range in ascending order; empty if the step is not positive.
    ///
    /// ```rust
    /// use toolmap_core::config::StepRange;
    ///
    /// assert_eq!(StepRange::new(1, 12, 3).values(), vec![1, 4, 7, 10]);
    /// assert!(StepRange::new(1, 12, 0).values().is_empty());
    /// ```
    pub fn values(&self) -> Vec<i64> {
        match usize::try_from(self.step) {
            Ok(step) if step > 0 => (self.start..=self.end).step_by(step).collect(),
            _ => Vec::new(),
        }
    }

    fn check(&self, name: &str) -> Result<()> {
        if self.step <= 0 {
            return Err(Error::Config(format!("{name}: step must be positive")));
        }
        if self.start > self.end {
            return Err(Error::Config(format!("{name}: start is after end")));
        }
        Ok(())
    }
}

/// Ranges for the three inline grids.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// BMI height × weight grid
    pub bmi: BmiGrid,
    /// Birth date grid
    pub age: AgeGrid,
    /// Unit-converter value grid
    pub unit: UnitGrid,
}

/// BMI grid ranges (centimetres, kilograms).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BmiGrid {
    /// Heights in cm
    pub height: StepRange,
    /// Weights in kg
    pub weight: StepRange,
}

impl Default for BmiGrid {
    fn default() -> Self {
        Self {
            height: StepRange::new(140, 210, 5),
            weight: StepRange::new(40, 150, 5),
        }
    }
}

/// Birth date grid ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeGrid {
    /// Birth years
    pub year: StepRange,
    /// Months
    pub month: StepRange,
    /// Days of month
    pub day: StepRange,
}

impl Default for AgeGrid {
    fn default() -> Self {
        Self {
            year: StepRange::new(1925, 2024, 1),
            month: StepRange::new(1, 12, 3),
            day: StepRange::new(1, 28, 7),
        }
    }
}

/// Unit-converter grid: every popular unit pair at values `2^0..=2^max_exponent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitGrid {
    /// Largest exponent
    pub max_exponent: u32,
}

impl Default for UnitGrid {
    fn default() -> Self {
        Self { max_exponent: 10 }
    }
}

impl UnitGrid {
    /// `1, 2, 4, ..., 2^max_exponent`.
    pub fn values(&self) -> Vec<i64> {
        (0..=self.max_exponent.min(MAX_UNIT_EXPONENT))
            .map(|exp| 2_i64.pow(exp))
            .collect()
    }
}

/// Change frequency and priority attached to one sitemap section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionMeta {
    /// Change frequency hint
    pub changefreq: ChangeFrequency,
    /// Priority, 0.0 to 1.0
    pub priority: f32,
}

impl SectionMeta {
    /// Create section metadata.
    pub const fn new(changefreq: ChangeFrequency, priority: f32) -> Self {
        Self {
            changefreq,
            priority,
        }
    }
}

/// Per-section sitemap metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionsConfig {
    /// Home page
    pub home: SectionMeta,
    /// Other static pages
    pub static_pages: SectionMeta,
    /// `/tools/<id>` landing pages
    pub tool_index: SectionMeta,
    /// Popular enumerated variants
    pub popular: SectionMeta,
    /// Inline grid variants
    pub grid: SectionMeta,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            home: SectionMeta::new(ChangeFrequency::Daily, 1.0),
            static_pages: SectionMeta::new(ChangeFrequency::Monthly, 0.5),
            tool_index: SectionMeta::new(ChangeFrequency::Weekly, 0.9),
            popular: SectionMeta::new(ChangeFrequency::Weekly, 0.7),
            grid: SectionMeta::new(ChangeFrequency::Monthly, 0.6),
        }
    }
}

impl Config {
    /// Load configuration from the default location, or defaults if absent.
    ///
    /// Environment overrides are applied and the result validated.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_unvalidated()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::load_from_unvalidated(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`Config::load`] but without validation, for callers that layer
    /// further overrides and call [`Config::validate`] themselves.
    pub fn load_unvalidated() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            Self::read(&path)?
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Self::default()
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Like [`Config::load_from`] but without validation.
    pub fn load_from_unvalidated(path: &Path) -> Result<Self> {
        let mut config = Self::read(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save the configuration as pretty TOML.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {e}")))?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config: {e}")))?;
        Ok(())
    }

    /// Platform config path:
    /// - Linux: `~/.config/toolmap/config.toml`
    /// - macOS: `~/Library/Application Support/dev.toolmap.toolmap/config.toml`
    /// - Windows: `%APPDATA%\toolmap\toolmap\config\config.toml`
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("dev", "toolmap", "toolmap")
            .ok_or_else(|| Error::Config("Failed to determine project directories".into()))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Apply `TOOLMAP_BASE_URL` and `TOOLMAP_POPULAR_LIMIT`.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(base_url) = std::env::var("TOOLMAP_BASE_URL") {
            self.site.base_url = base_url;
        }
        if let Ok(limit) = std::env::var("TOOLMAP_POPULAR_LIMIT") {
            self.site.popular_limit = limit.trim().parse().map_err(|e| {
                Error::Config(format!("TOOLMAP_POPULAR_LIMIT is not a number: {e}"))
            })?;
        }
        Ok(())
    }

    /// Check ranges, priorities and the base URL; normalizes a trailing slash
    /// off `base_url`.
    pub fn validate(&mut self) -> Result<()> {
        let parsed = url::Url::parse(&self.site.base_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {e}", self.site.base_url)))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(Error::InvalidUrl(format!(
                "{}: base_url must be an http(s) URL with a host",
                self.site.base_url
            )));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(Error::InvalidUrl(format!(
                "{}: base_url must not carry a query or fragment",
                self.site.base_url
            )));
        }
        self.site.base_url = self.site.base_url.trim_end_matches('/').to_string();

        if self.site.max_urls_per_file == 0 || self.site.max_urls_per_file > PROTOCOL_MAX_URLS {
            return Err(Error::Config(format!(
                "max_urls_per_file must be between 1 and {PROTOCOL_MAX_URLS}"
            )));
        }

        self.grids.bmi.height.check("grids.bmi.height")?;
        self.grids.bmi.weight.check("grids.bmi.weight")?;
        self.grids.age.year.check("grids.age.year")?;
        self.grids.age.month.check("grids.age.month")?;
        self.grids.age.day.check("grids.age.day")?;
        if self.grids.unit.max_exponent > MAX_UNIT_EXPONENT {
            return Err(Error::Config(format!(
                "grids.unit.max_exponent must be at most {MAX_UNIT_EXPONENT}"
            )));
        }

        let sections = [
            ("home", self.sections.home),
            ("static_pages", self.sections.static_pages),
            ("tool_index", self.sections.tool_index),
            ("popular", self.sections.popular),
            ("grid", self.sections.grid),
        ];
        for (name, meta) in sections {
            if !(0.0..=1.0).contains(&meta.priority) {
                return Err(Error::Config(format!(
                    "sections.{name}.priority must be within 0.0..=1.0"
                )));
            }
        }
        Ok(())
    }
}
