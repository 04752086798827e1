//! # agentdocs CLI
//!
//! Writes a ready-made set of AI-assistant documentation into a project.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (`--help` / `--version` print and exit 0).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! |  0   | Success                                  |
//! |  1   | Internal / system error, partial failure |
//! |  2   | User / input error                       |
//! |  3   | Resource not found                       |
//! |  4   | Configuration error                      |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands, ConfigCommands},
    config::AppConfig,
    error::{CliError, CliResult},
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

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse().and_then(|cli| cli.check_conflicts().map(|()| cli)) {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version land here too, with exit code 0.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };
    let verbose = cli.global.verbose > 0;

    // ── 2. Initialise tracing ─────────────────────────────────────────────
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

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match load_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(e, verbose),
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, config, output) {
        Ok(()) => {
            info!("agentdocs completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Load configuration for the chosen command.
///
/// `init` and `config path` only need the file's location, so a missing or
/// broken file falls back to the defaults there.
fn load_config(cli: &Cli) -> CliResult<AppConfig> {
    let tolerant = matches!(
        cli.command,
        Some(Commands::Init(_)) | Some(Commands::Config(ConfigCommands::Path))
    );

    match AppConfig::load(cli.global.config.as_ref()) {
        Err(e) if tolerant => {
            debug!(error = %e, "Configuration not loaded, using defaults");
            Ok(AppConfig::default())
        }
        result => result,
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        None => commands::generate::execute(cli.generate, &config, &output),
        Some(Commands::New(cmd)) => commands::new::execute(cmd, &config, &output),
        Some(Commands::List(cmd)) => commands::list::execute(cmd, &output),
        Some(Commands::Init(cmd)) => commands::init::execute(cmd, &cli.global, &output),
        Some(Commands::Completions(cmd)) => commands::completions::execute(cmd),
        Some(Commands::Config(cmd)) => {
            commands::config::execute(cmd, &cli.global, &config, &output)
        }
    }
}

/// Translate a `CliError` into a user message and an exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    // stderr, so the message survives a redirected stdout.
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn only_init_and_config_path_tolerate_a_missing_file() {
        let missing = "/nonexistent/agentdocs.toml";

        let init = Cli::parse_from(["agentdocs", "--config", missing, "init"]);
        assert_eq!(load_config(&init).unwrap(), AppConfig::default());

        let path = Cli::parse_from(["agentdocs", "--config", missing, "config", "path"]);
        assert!(load_config(&path).is_ok());

        let list = Cli::parse_from(["agentdocs", "--config", missing, "list"]);
        assert_eq!(load_config(&list).unwrap_err().exit_code(), 4);
    }

    #[test]
    fn help_is_not_an_error() {
        let err = Cli::try_parse_from(["agentdocs", "--help"]).unwrap_err();
        assert_eq!(err.exit_code(), 0);
    }
}
