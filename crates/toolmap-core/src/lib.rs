//! # toolmap-core
//!
//! URL enumeration and sitemap assembly for a utility-calculator site.
//!
//! Calculator pages are addressable by their inputs (`/tools/bmi-calculator/170/70`),
//! which gives every popular input combination its own indexable page. This
//! crate decides which of those pages exist.
//!
//! ## Architecture
//!
//! - **Registry**: the validated, read-only table of tools, their URL templates
//!   and popular sample values
//! - **Enumeration**: a bounded, deterministic walk over sample values that
//!   renders popular paths for one tool
//! - **Sitemap**: assembles static pages, tool pages, popular paths and inline
//!   grids into entries, writes them as XML and audits deployed sitemaps
//! - **Configuration**: base URL, limits, grid ranges and section metadata
//!
//! ## Quick Start
//!
//! ```rust
//! use toolmap_core::{Config, SitemapAssembler, ToolRegistry, UrlEnumerator};
//!
//! let registry = ToolRegistry::builtin()?;
//!
//! let urls = UrlEnumerator::new(&registry).generate_popular_urls("ip-lookup", 10);
//! assert_eq!(urls.len(), 3);
//!
//! let config = Config::default();
//! let entries = SitemapAssembler::new(&registry, &config).assemble();
//! println!("{} sitemap entries", entries.len());
//! # Ok::<(), toolmap_core::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result<T, Error>`]. Enumerating an unknown tool
//! is not an error and yields an empty list:
//!
//! ```rust
//! use toolmap_core::{ToolRegistry, UrlEnumerator};
//!
//! let registry = ToolRegistry::builtin()?;
//! assert!(UrlEnumerator::new(&registry).generate_popular_urls("warp-drive", 5).is_empty());
//! # Ok::<(), toolmap_core::Error>(())
//! ```

/// Configuration for base URL, limits, grids and section metadata
pub mod config;
/// Popular URL enumeration
pub mod enumerate;
/// Error types and result aliases
pub mod error;
/// Tool registry and built-in tool table
pub mod registry;
/// Sitemap assembly, XML and auditing
pub mod sitemap;

pub use config::Config;
pub use enumerate::{
    Axis, Combinations, DEFAULT_POPULAR_LIMIT, EnumerationStrategy, Encoding, UrlEnumerator,
};
pub use error::{Error, Result};
pub use registry::{
    ParamSamples, ParamValue, RegistrySearchResult, ToolConfig, ToolRegistry, UrlTemplate,
};
pub use sitemap::{
    AssemblyStats, ChangeFrequency, SitemapAssembler, SitemapAudit, SitemapEntry,
};
