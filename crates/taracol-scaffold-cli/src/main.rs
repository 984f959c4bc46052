//! # Taracol Scaffold CLI
//!
//! Creates the Taracol monorepo tree in one pass.
//!
//! ## Startup sequence
//!
//! 1. Load `.env` from the working directory.
//! 2. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 3. Load configuration (defaults, file, environment).
//! 4. Initialise the tracing subscriber.
//! 5. Run the scaffold and print the summary.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                        |
//! |------|--------------------------------|
//! |  0   | Success                        |
//! |  1   | Filesystem / internal error    |
//! |  2   | Invalid arguments or name      |
//! |  4   | Configuration error            |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::CliError,
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and exit 0.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    // Logging is not up yet, so config errors go straight to stderr.
    let config = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
            return handle_error(CliError::from(e), false, no_color);
        }
    };

    if let Err(e) = init_logging(&config) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(?config, "configuration loaded");

    let output = OutputManager::new(&config);

    match commands::scaffold::execute(cli, &output) {
        Ok(()) => {
            info!("Taracol scaffold completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, config.is_verbose(), config.output.no_color),
    }
}

/// The single place where structured errors become stderr output and an
/// OS exit code.
fn handle_error(err: CliError, verbose: bool, no_color: bool) -> ExitCode {
    err.log();

    let color = !no_color && std::io::IsTerminal::is_terminal(&std::io::stderr());
    eprint!("{}", err.render(verbose, color));

    ExitCode::from(err.exit_code())
}
