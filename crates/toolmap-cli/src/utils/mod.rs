//! Shared CLI helpers.

pub mod cli_args;
pub mod config;
mod logging;

pub use logging::initialize_logging;
