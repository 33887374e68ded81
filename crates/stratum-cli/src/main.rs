//! # Stratum CLI
//!
//! Scaffolds a clean-architecture Cargo workspace and its use cases.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (`--help` / `--version` print and exit 0).
//! 2. `--completions`: print the script and exit.
//! 3. Initialise the tracing subscriber (logging).
//! 4. Load configuration (file + env + defaults).
//! 5. Build the [`OutputManager`] and run the scaffold command.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                         |
//! |------|---------------------------------|
//! |  0   | Success (or overwrite declined) |
//! |  1   | Internal / system error         |
//! |  2   | Usage or invalid name           |
//! |  3   | Use case already exists         |
//! |  4   | Configuration error             |

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::{debug, info};

use crate::{cli::Cli, config::AppConfig, error::CliError, logging::init_logging, output::OutputManager};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Missing .env is fine; real deployments use the environment directly.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version come through here too, with exit code 0.
            let code = e.exit_code();
            let _ = e.print();
            return ExitCode::from(u8::try_from(code).unwrap_or(2));
        }
    };

    // ── 2. Completions need no logging or config ──────────────────────────
    if let Some(shell) = cli.completions {
        return match commands::completions::execute(shell) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => handle_error(e, false, false),
        };
    }

    // ── 3. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;
    let color = !cli.global.no_color && std::io::stderr().is_terminal();

    // ── 4. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(e, verbose, color),
    };

    // ── 5. Run ────────────────────────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    match commands::scaffold::execute(cli.scaffold, config, output) {
        Ok(()) => {
            info!("Stratum completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, color),
    }
}

/// Translate a `CliError` into a user message and an exit code.
///
/// Usage errors keep the classic `ERROR - <message>` line followed by the
/// usage text; everything else gets the formatted error with suggestions.
fn handle_error(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();

    let msg = if err.shows_usage() {
        let help = Cli::command().render_help().to_string();
        err.format_usage(&help)
    } else {
        err.render(verbose, color)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
