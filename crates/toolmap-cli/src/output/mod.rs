//! Output formats shared by the commands.

use anyhow::Result;
use serde::Serialize;

/// Output format options supported by the CLI
///
/// - **Text**: human-readable output with colors
/// - **Json**: a single pretty-printed JSON document
/// - **Ndjson**: one JSON value per line, for streaming
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty text output
    Text,
    /// Single JSON document
    Json,
    /// Newline-delimited JSON
    Ndjson,
}

impl OutputFormat {
    /// Whether the format is meant for machines.
    pub const fn is_machine(self) -> bool {
        matches!(self, Self::Json | Self::Ndjson)
    }
}

/// Print `items` as a JSON array or as one JSON value per line.
///
/// Text output is the caller's job; nothing is printed for it.
pub fn print_list<T: Serialize>(items: &[T], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(items)?),
        OutputFormat::Ndjson => {
            for item in items {
                println!("{}", serde_json::to_string(item)?);
            }
        },
        OutputFormat::Text => {},
    }
    Ok(())
}

/// Print one document as JSON (pretty for `Json`, compact for `Ndjson`).
pub fn print_object<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Ndjson => println!("{}", serde_json::to_string(value)?),
        OutputFormat::Text => {},
    }
    Ok(())
}
