//! toolmap CLI - popular URL enumeration and sitemap generation
//!
//! Each subcommand lives in its own module under `commands`.
use anyhow::Result;
use clap::{CommandFactory, Parser};

mod cli;
mod commands;
mod output;
mod utils;

use crate::utils::initialize_logging;
use cli::{Cli, Commands};

/// Execute the toolmap CLI with the current process arguments.
///
/// # Errors
///
/// Returns an error if logging setup, config loading, or the command fails.
pub async fn run() -> Result<()> {
    // Convert Broken pipe panics into a clean exit
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        if msg.contains("Broken pipe") || msg.contains("broken pipe") {
            std::process::exit(0);
        }
        eprintln!("{msg}");
    }));

    let cli = Cli::parse();
    initialize_logging(&cli)?;
    execute_command(cli).await
}

async fn execute_command(cli: Cli) -> Result<()> {
    let quiet = cli.quiet;
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Commands::Completions { shell }) => commands::completions::generate(shell),
        Some(Commands::Tools { format }) => {
            commands::tools::execute(config_path, format.resolve())?;
        },
        Some(Commands::Lookup {
            query,
            limit,
            format,
        }) => commands::lookup::execute(&query, limit, format.resolve(), quiet)?,
        Some(Commands::Urls {
            tool,
            limit,
            absolute,
            format,
        }) => commands::urls::execute(
            config_path,
            &tool,
            limit,
            absolute,
            format.resolve(),
            quiet,
        )?,
        Some(Commands::Sitemap(args)) => commands::sitemap::execute(config_path, &args, quiet)?,
        Some(Commands::Check(args)) => {
            commands::check::execute(config_path, &args, quiet).await?;
        },
        Some(Commands::Validate { format }) => {
            commands::validate::execute(config_path, format.resolve())?;
        },
        None => {
            Cli::command().print_help()?;
            println!();
        },
    }

    Ok(())
}
