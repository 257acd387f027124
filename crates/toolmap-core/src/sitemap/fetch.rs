use super::SitemapEntry;
use super::xml::{SitemapContent, parse_sitemap_content};
use crate::{Error, Result};
use futures::future::{BoxFuture, FutureExt, join_all};
use reqwest::Client;
use std::time::Duration;
use tracing::instrument;

/// Default timeout for sitemap fetch requests.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum recursion depth for sitemap index files.
const MAX_INDEX_DEPTH: u8 = 2;

/// Maximum number of child sitemaps to fetch from an index.
const MAX_CHILD_SITEMAPS: usize = 50;

/// Fetch and parse a deployed sitemap.
///
/// Sitemap indices are followed (up to two levels, 50 children each) and
/// children are fetched concurrently. A child that fails is logged and
/// skipped; a failure of `url` itself is an error.
///
/// ```no_run
/// use toolmap_core::sitemap::fetch_sitemap;
///
/// # async fn example() -> toolmap_core::Result<()> {
/// let entries = fetch_sitemap("https://calc.example.com/sitemap.xml").await?;
/// println!("{} URLs deployed", entries.len());
/// # Ok(())
/// # }
/// ```
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch_sitemap(url: &str) -> Result<Vec<SitemapEntry>> {
    let parsed = url::Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::InvalidUrl(format!("{url}: only http(s) sitemaps can be fetched")));
    }
    let client = build_sitemap_client()?;
    fetch_recursive(client, url.to_string(), 0).await
}

fn fetch_recursive(
    client: Client,
    url: String,
    depth: u8,
) -> BoxFuture<'static, Result<Vec<SitemapEntry>>> {
    async move {
        if depth > MAX_INDEX_DEPTH {
            return Err(Error::ResourceLimited(format!(
                "Sitemap index recursion depth exceeded (max: {MAX_INDEX_DEPTH})"
            )));
        }

        tracing::debug!(url = %url, depth, "Fetching sitemap");
        let xml = client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        match parse_sitemap_content(&xml)? {
            SitemapContent::Entries(entries) => Ok(entries),
            SitemapContent::Index(locs) => {
                if locs.len() > MAX_CHILD_SITEMAPS {
                    tracing::warn!(
                        listed = locs.len(),
                        max = MAX_CHILD_SITEMAPS,
                        "Sitemap index truncated"
                    );
                }
                let children = locs
                    .into_iter()
                    .take(MAX_CHILD_SITEMAPS)
                    .map(|loc| fetch_recursive(client.clone(), loc, depth + 1));

                let mut all_entries = Vec::new();
                for result in join_all(children).await {
                    match result {
                        Ok(entries) => all_entries.extend(entries),
                        Err(e) => tracing::warn!(error = %e, "Failed to fetch child sitemap"),
                    }
                }
                Ok(all_entries)
            },
        }
    }
    .boxed()
}

fn build_sitemap_client() -> Result<Client> {
    Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(concat!("toolmap/", env!("CARGO_PKG_VERSION")))
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(Error::Network)
}
