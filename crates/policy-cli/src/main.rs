//! Policy equivalence CLI
//!
//! Compares XML policy documents the way a reconciliation run decides whether
//! an update is needed.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::{CliError, Result};

/// Documents are equivalent, or the command succeeded
const EXIT_OK: i32 = 0;
/// Documents differ
const EXIT_CHANGED: i32 = 1;
/// Usage, I/O or parse error
const EXIT_ERROR: i32 = 2;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(EXIT_ERROR);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    logging::init(cli.verbose)
        .map_err(|e| CliError::user(format!("Failed to initialize logging: {e}")))?;
    tracing::debug!("Verbose mode enabled");

    execute_command(cli.command)
}

fn execute_command(cmd: Commands) -> Result<i32> {
    match cmd {
        Commands::Compare {
            old,
            new,
            profile,
            field,
            config,
            json,
        } => {
            let options = commands::CompareOptions {
                profile,
                field: field.as_deref(),
                config: config.as_deref(),
                json,
            };
            let equivalent = commands::run_compare(&old, &new, &options)?;
            Ok(if equivalent { EXIT_OK } else { EXIT_CHANGED })
        }
        Commands::Normalize { file, profile } => {
            commands::run_normalize(&file, profile)?;
            Ok(EXIT_OK)
        }
        Commands::Canonical { file } => {
            commands::run_canonical(&file)?;
            Ok(EXIT_OK)
        }
    }
}
