//! Console tic-tac-toe.
//!
//! Plays a single game between two people sharing the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tictactoe::GameLoop;
use tictactoe_console::{ConsoleConfig, ConsoleInterface};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let ui = ConsoleInterface::stdio(&config);
    let outcome = GameLoop::new(ui, *config.first_player()).run()?;
    info!(%outcome, "Exiting");

    Ok(())
}

/// Builds the effective configuration from the file (if any) and flags.
#[instrument(skip_all)]
fn load_config(cli: &Cli) -> Result<ConsoleConfig> {
    let config = match &cli.config {
        Some(path) => ConsoleConfig::from_file(path)?,
        None => ConsoleConfig::default(),
    };

    Ok(match cli.first {
        Some(mark) => config.with_first_player(mark),
        None => config,
    })
}
