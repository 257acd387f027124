//! # CLI Structure and Argument Parsing
//!
//! Command-line interface for `toolmap`, built with `clap` derive macros.
//!
//! ## Usage Patterns
//!
//! ```bash
//! # Inspect the registry
//! toolmap tools
//! toolmap lookup currency
//!
//! # Popular URLs for one tool
//! toolmap urls bmi-calculator --limit 10
//!
//! # Write sitemap.xml (split into an index when large)
//! toolmap sitemap --out public/sitemap.xml --base-url https://calc.example.com
//!
//! # Audit a deployed sitemap
//! toolmap check https://calc.example.com/sitemap.xml
//! ```
//!
//! ## Output Formats
//!
//! Commands that print data accept `-f text|json|ndjson`. Text is the default on
//! a terminal, JSON when stdout is piped.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::cli_args::FormatArg;

/// Main CLI structure for the `toolmap` command
#[derive(Parser, Clone, Debug)]
#[command(name = "toolmap")]
#[command(version)]
#[command(about = "toolmap - popular URL enumeration and sitemap generation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Path to configuration file (overrides autodiscovery). Also via `TOOLMAP_CONFIG`.
    #[arg(long, global = true, value_name = "FILE", env = "TOOLMAP_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands
///
/// ## Registry
/// - `tools`: list registered tools
/// - `lookup`: fuzzy-search tools
/// - `validate`: check the registry and configuration
///
/// ## URLs and sitemaps
/// - `urls`: popular URLs for a tool
/// - `sitemap`: assemble and write the sitemap
/// - `check`: audit an existing sitemap
///
/// ## Utility
/// - `completions`: shell completion scripts
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// List registered tools
    #[command(visible_alias = "list")]
    Tools {
        #[command(flatten)]
        format: FormatArg,
    },

    /// Search the tool registry
    Lookup {
        /// Search query (matched against id, name, category and description)
        query: String,
        /// Maximum number of matches to show
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
        #[command(flatten)]
        format: FormatArg,
    },

    /// Print popular URLs for a tool
    Urls {
        /// Tool identifier, e.g. `bmi-calculator`
        tool: String,
        /// Maximum number of URLs (defaults to `site.popular_limit`)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Prefix each path with the configured base URL
        #[arg(long)]
        absolute: bool,
        #[command(flatten)]
        format: FormatArg,
    },

    /// Assemble the sitemap and write it to disk
    Sitemap(SitemapArgs),

    /// Compare an existing sitemap with a fresh assembly
    Check(CheckArgs),

    /// Validate the tool registry and configuration
    Validate {
        #[command(flatten)]
        format: FormatArg,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Arguments for `toolmap sitemap`
#[derive(Args, Clone, Debug)]
pub struct SitemapArgs {
    /// Sitemap file to write; split files are written next to it
    #[arg(short = 'o', long, value_name = "PATH", default_value = "sitemap.xml")]
    pub out: PathBuf,

    /// Override `site.base_url`
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override `site.max_urls_per_file`
    #[arg(long, value_name = "N")]
    pub max_per_file: Option<usize>,

    /// Print entries to stdout (XML for text, entries for JSON/NDJSON) instead of writing files
    #[arg(long)]
    pub stdout: bool,

    #[command(flatten)]
    pub format: FormatArg,
}

/// Arguments for `toolmap check`
#[derive(Args, Clone, Debug)]
pub struct CheckArgs {
    /// Sitemap file path or http(s) URL
    #[arg(value_name = "PATH|URL")]
    pub target: String,

    /// Override `site.base_url` used for the fresh assembly
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(flatten)]
    pub format: FormatArg,
}
