//! Logging initialization and color control.

use anyhow::Result;
use colored::control as color_control;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::cli::{Cli, Commands};

/// Install the global tracing subscriber (stderr) and apply color settings.
///
/// `-v` selects DEBUG, `-q` ERROR, otherwise WARN. Machine-readable output
/// drops to ERROR unless `-v` was given, and disables colors.
pub fn initialize_logging(cli: &Cli) -> Result<()> {
    let mut level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let command_format = match &cli.command {
        Some(
            Commands::Tools { format }
            | Commands::Lookup { format, .. }
            | Commands::Urls { format, .. }
            | Commands::Validate { format },
        ) => Some(format.resolve()),
        Some(Commands::Sitemap(args)) => Some(args.format.resolve()),
        Some(Commands::Check(args)) => Some(args.format.resolve()),
        Some(Commands::Completions { .. }) | None => None,
    };
    let machine_output = command_format.is_some_and(|format| format.is_machine());
    if machine_output && !cli.verbose {
        level = Level::ERROR;
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let env_no_color = std::env::var_os("NO_COLOR").is_some();
    if cli.no_color || env_no_color || machine_output {
        color_control::set_override(false);
    }
    Ok(())
}
