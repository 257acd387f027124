use super::SitemapEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Difference between the URLs a site should publish and what a sitemap lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapAudit {
    /// Distinct URLs in `actual`
    pub checked: usize,
    /// Expected URLs absent from the sitemap, in expected order
    pub missing: Vec<String>,
    /// Listed URLs that are not expected, in sitemap order
    pub unexpected: Vec<String>,
}

impl SitemapAudit {
    /// Whether the sitemap matches exactly (ignoring order and duplicates).
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

/// Compare URL sets. Metadata and ordering are ignored; each URL is
/// reported once.
pub fn audit(expected: &[SitemapEntry], actual: &[SitemapEntry]) -> SitemapAudit {
    let expected_set: HashSet<&str> = expected.iter().map(|e| e.url.as_str()).collect();
    let actual_set: HashSet<&str> = actual.iter().map(|e| e.url.as_str()).collect();

    let mut seen = HashSet::new();
    let missing = expected
        .iter()
        .map(|e| e.url.as_str())
        .filter(|url| !actual_set.contains(url) && seen.insert(*url))
        .map(str::to_string)
        .collect();

    let mut seen = HashSet::new();
    let unexpected = actual
        .iter()
        .map(|e| e.url.as_str())
        .filter(|url| !expected_set.contains(url) && seen.insert(*url))
        .map(str::to_string)
        .collect();

    SitemapAudit {
        checked: actual_set.len(),
        missing,
        unexpected,
    }
}
