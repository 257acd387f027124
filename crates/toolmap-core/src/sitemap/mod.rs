//! Sitemap assembly, XML output, and auditing of deployed sitemaps.
//!
//! ## Quick Start
//!
//! ```rust
//! use toolmap_core::{Config, SitemapAssembler, ToolRegistry};
//! use toolmap_core::sitemap::{parse_sitemap, write_urlset};
//!
//! let registry = ToolRegistry::builtin()?;
//! let config = Config::default();
//! let entries = SitemapAssembler::new(&registry, &config).assemble();
//!
//! let xml = write_urlset(&entries)?;
//! assert_eq!(parse_sitemap(&xml)?.len(), entries.len());
//! # Ok::<(), toolmap_core::Error>(())
//! ```

mod assembler;
mod audit;
mod entry;
mod fetch;
pub mod grid;
mod xml;

pub use assembler::{Assembly, AssemblyStats, STATIC_PAGES, SitemapAssembler, absolute_url};
pub use audit::{SitemapAudit, audit};
pub use entry::{ChangeFrequency, SitemapEntry};
pub use fetch::fetch_sitemap;
pub use xml::{
    SITEMAP_NS, SitemapFile, is_sitemap_index, parse_sitemap, parse_sitemap_index, render_files,
    split_into_files, write_sitemap_index, write_urlset,
};
