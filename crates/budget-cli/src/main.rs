//! Budget CLI - track income and expenses for the length of a session
//!
//! This is the command-line interface for Budget. It drives the in-memory
//! ledger from `budget-core` through an interactive or scripted session.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::{AppContext, Session};
use crate::cli::{Cli, Commands};
use crate::commands::misc;
use crate::config::{load_config, resolve_config_path, BudgetConfig};
use crate::constants::exit_codes;
use crate::errors::CliError;
use crate::helpers::parse_output_format;
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();

    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            let ui_ctx = UiContext::detect(&cli);
            let classified = CliError::classify(&e);
            print_error(&ui_ctx, &classified.to_string(), classified.hint());
            classified.exit_code()
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    if let Some(Commands::Completions(args)) = &cli.command {
        misc::handle_completions(args.shell)?;
        return Ok(exit_codes::SUCCESS);
    }

    parse_output_format(cli.format.as_deref()).map_err(|e| {
        CliError::invalid_input_with_hint(e.to_string(), "Use --format table or --format plain.")
    })?;

    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = load_config(&config_path)?;
    init_tracing(&config);
    tracing::debug!(path = %config_path.display(), "config resolved");

    let ctx = AppContext::new(cli, config);
    let clock = ctx.clock().map_err(|e| {
        CliError::invalid_input_with_hint(e.to_string(), "Use an IANA name such as Europe/Berlin.")
    })?;

    match &cli.command {
        None | Some(Commands::Session) => {
            let mut session = Session::new(&ctx, clock);
            Ok(session.run())
        }
        Some(Commands::Completions(_)) => Ok(exit_codes::SUCCESS),
    }
}

/// Log to stderr, filtered by `RUST_LOG` or the configured level.
fn init_tracing(config: &BudgetConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
