//! Monster arena command line.
//!
//! Composition root: loads configuration (defaults, TOML file, environment),
//! installs logging, then runs one subcommand against the arena runtime.

mod commands;
mod config;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use commands::{BattleArgs, DeriveArgs, RosterArgs};
use config::CliConfig;

/// Monster arena battles
#[derive(Parser)]
#[command(name = "arena")]
#[command(about = "Battle DNA-derived monsters against the arena roster", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML battle configuration (overrides ARENA_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Battle a roster opponent
    Battle(BattleArgs),

    /// Show the type, attributes and power a DNA value derives to
    Derive(DeriveArgs),

    /// List roster opponents
    Roster(RosterArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Command::Battle(cmd) => cmd.execute(config).await,
        Command::Derive(cmd) => cmd.execute(),
        Command::Roster(cmd) => cmd.execute(&config),
    }
}
