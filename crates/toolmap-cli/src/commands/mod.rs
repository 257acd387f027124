//! Command implementations, one module per subcommand.

pub mod check;
pub mod completions;
pub mod lookup;
pub mod sitemap;
pub mod tools;
pub mod urls;
pub mod validate;

use anyhow::{Context, Result};
use toolmap_core::ToolRegistry;

/// The built-in registry, validated.
pub fn builtin_registry() -> Result<ToolRegistry> {
    ToolRegistry::builtin().context("Built-in tool table is invalid")
}
