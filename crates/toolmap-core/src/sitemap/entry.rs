use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single `<url>` of a sitemap.
///
/// Assembled entries always carry every field; parsed entries keep whatever
/// the source document provided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    /// Absolute URL of the page.
    pub url: String,
    /// Last modification time.
    pub lastmod: Option<DateTime<Utc>>,
    /// How frequently the page changes.
    pub changefreq: Option<ChangeFrequency>,
    /// Priority of this URL relative to others (0.0 to 1.0).
    pub priority: Option<f32>,
}

impl SitemapEntry {
    /// Entry with all metadata set.
    pub fn new(
        url: impl Into<String>,
        lastmod: DateTime<Utc>,
        changefreq: ChangeFrequency,
        priority: f32,
    ) -> Self {
        Self {
            url: url.into(),
            lastmod: Some(lastmod),
            changefreq: Some(changefreq),
            priority: Some(priority.clamp(0.0, 1.0)),
        }
    }

    /// Entry with only a location.
    pub fn bare(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            lastmod: None,
            changefreq: None,
            priority: None,
        }
    }
}

/// Change frequency hints from the sitemap protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    /// The page changes every time it is accessed.
    Always,
    /// The page changes hourly.
    Hourly,
    /// The page changes daily.
    Daily,
    /// The page changes weekly.
    Weekly,
    /// The page changes monthly.
    Monthly,
    /// The page changes yearly.
    Yearly,
    /// The page is archived and will not change.
    Never,
}

impl ChangeFrequency {
    /// Protocol keyword, as written into `<changefreq>`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChangeFrequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            "never" => Ok(Self::Never),
            _ => Err(Error::Parse(format!("Invalid changefreq value: {s}"))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_changefreq_parsing() {
        let test_cases = [
            ("always", ChangeFrequency::Always),
            ("hourly", ChangeFrequency::Hourly),
            ("daily", ChangeFrequency::Daily),
            ("weekly", ChangeFrequency::Weekly),
            ("monthly", ChangeFrequency::Monthly),
            ("yearly", ChangeFrequency::Yearly),
            ("never", ChangeFrequency::Never),
            // Case insensitive
            ("WEEKLY", ChangeFrequency::Weekly),
            ("Weekly", ChangeFrequency::Weekly),
        ];

        for (value, expected) in test_cases {
            let parsed: ChangeFrequency = value.parse().unwrap();
            assert_eq!(parsed, expected);
            assert_eq!(parsed.to_string(), value.to_lowercase());
        }
    }

    #[test]
    fn test_changefreq_invalid_value() {
        let result: Result<ChangeFrequency> = "fortnightly".parse();
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_new_clamps_priority() {
        let now = Utc::now();
        let entry = SitemapEntry::new("https://a.example/", now, ChangeFrequency::Daily, 3.0);
        assert_eq!(entry.priority, Some(1.0));
        assert_eq!(entry.lastmod, Some(now));
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = SitemapEntry::bare("https://a.example/tools");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["url"], "https://a.example/tools");
        assert!(json["lastmod"].is_null());
    }
}
