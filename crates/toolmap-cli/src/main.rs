//! toolmap CLI - popular URL enumeration and sitemap generation
//!
//! Command implementations live in the library crate; this binary only
//! starts the runtime.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    toolmap_cli::run().await
}
