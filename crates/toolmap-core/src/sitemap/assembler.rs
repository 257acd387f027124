use super::grid;
use super::SitemapEntry;
use crate::config::{Config, SectionMeta};
use crate::enumerate::UrlEnumerator;
use crate::registry::ToolRegistry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Site pages that exist independently of the tool table, home first.
pub const STATIC_PAGES: [&str; 6] = ["/", "/tools", "/about", "/privacy", "/terms", "/contact"];

/// Builds the full sitemap entry list for a site.
///
/// Output order:
/// 1. static pages
/// 2. one `/tools/<id>` page per tool
/// 3. popular paths per tool
/// 4. BMI, age and unit-converter grids
#[derive(Debug, Clone, Copy)]
pub struct SitemapAssembler<'a> {
    registry: &'a ToolRegistry,
    config: &'a Config,
}

/// Entries contributed by each section of an assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyStats {
    /// Home and other static pages
    pub static_pages: usize,
    /// Tool landing pages
    pub tool_pages: usize,
    /// Popular enumerated paths
    pub popular: usize,
    /// BMI grid
    pub bmi_grid: usize,
    /// Age grid
    pub age_grid: usize,
    /// Unit-converter grid
    pub unit_grid: usize,
    /// All entries
    pub total: usize,
}

/// Entries together with their per-section counts.
#[derive(Debug, Clone)]
pub struct Assembly {
    /// Flat entry list, duplicates included
    pub entries: Vec<SitemapEntry>,
    /// Per-section counts
    pub stats: AssemblyStats,
}

impl<'a> SitemapAssembler<'a> {
    /// Create an assembler over a registry and site configuration.
    pub const fn new(registry: &'a ToolRegistry, config: &'a Config) -> Self {
        Self { registry, config }
    }

    /// Assemble with the current time as `lastmod`.
    pub fn assemble(&self) -> Vec<SitemapEntry> {
        self.assemble_at(Utc::now())
    }

    /// Assemble with a fixed `lastmod`.
    pub fn assemble_at(&self, now: DateTime<Utc>) -> Vec<SitemapEntry> {
        self.assemble_with_stats(now).entries
    }

    /// Assemble with a fixed `lastmod` and report section counts.
    #[instrument(skip(self), level = "debug")]
    pub fn assemble_with_stats(&self, now: DateTime<Utc>) -> Assembly {
        let sections = &self.config.sections;
        let mut builder = EntryBuilder {
            base_url: self.config.site.base_url.trim_end_matches('/'),
            now,
            entries: Vec::new(),
        };
        let mut stats = AssemblyStats::default();

        for (idx, page) in STATIC_PAGES.iter().enumerate() {
            let meta = if idx == 0 { sections.home } else { sections.static_pages };
            builder.push(page, meta);
        }
        stats.static_pages = STATIC_PAGES.len();

        for tool in self.registry.all_configs() {
            builder.push(&tool.index_path(), sections.tool_index);
        }
        stats.tool_pages = self.registry.len();

        let enumerator = UrlEnumerator::new(self.registry);
        let limit = self.config.site.popular_limit;
        stats.popular = self
            .registry
            .all_configs()
            .iter()
            .map(|tool| {
                builder.extend(
                    enumerator.generate_popular_urls(&tool.id, limit),
                    sections.popular,
                )
            })
            .sum();

        let grids = &self.config.grids;
        stats.bmi_grid = builder.extend(grid::bmi_paths(self.registry, grids), sections.grid);
        stats.age_grid = builder.extend(grid::age_paths(self.registry, grids), sections.grid);
        stats.unit_grid = builder.extend(grid::unit_paths(self.registry, grids), sections.grid);

        stats.total = builder.entries.len();
        debug!(
            total = stats.total,
            popular = stats.popular,
            grids = stats.bmi_grid + stats.age_grid + stats.unit_grid,
            "assembled sitemap"
        );

        Assembly {
            entries: builder.entries,
            stats,
        }
    }
}

struct EntryBuilder<'b> {
    base_url: &'b str,
    now: DateTime<Utc>,
    entries: Vec<SitemapEntry>,
}

impl EntryBuilder<'_> {
    fn push(&mut self, path: &str, meta: SectionMeta) {
        self.entries.push(SitemapEntry::new(
            absolute_url(self.base_url, path),
            self.now,
            meta.changefreq,
            meta.priority,
        ));
    }

    fn extend(&mut self, paths: Vec<String>, meta: SectionMeta) -> usize {
        let count = paths.len();
        for path in paths {
            self.push(&path, meta);
        }
        count
    }
}

/// Join a base URL (no trailing slash) and a rooted path.
pub fn absolute_url(base_url: &str, path: &str) -> String {
    format!("{base_url}{path}")
}
