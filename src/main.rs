//! hotmod - change impact engine for component compiler watch mode.

mod cli;
mod config;
mod core;
mod logger;
mod registry;
mod reload;
mod snapshot;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ProjectConfig;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    // Config problems are fatal before any cycle runs
    let config = match ProjectConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            log!("error"; "{:#}", e);
            std::process::exit(1);
        }
    };

    match &cli.command {
        Commands::Impact {
            snapshot,
            rebuild,
            pretty,
        } => cli::impact::run_impact(&config, snapshot, *rebuild, *pretty),
        Commands::Watch { snapshot } => cli::watch::watch_snapshot(&config, snapshot),
    }
}
