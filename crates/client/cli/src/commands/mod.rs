//! `arena` subcommands.

mod battle;
mod derive;
mod roster;

pub use battle::BattleArgs;
pub use derive::DeriveArgs;
pub use roster::RosterArgs;

use anyhow::{Context, Result};
use arena_content::{Roster, RosterLoader};

use crate::config::CliConfig;

/// Parse a DNA value written in decimal or `0x`-prefixed hex.
pub(crate) fn parse_dna(raw: &str) -> Result<u32, String> {
    let raw = raw.trim().replace('_', "");
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => raw.parse::<u32>(),
    };
    parsed.map_err(|e| format!("invalid DNA '{raw}': {e}"))
}

/// Roster from `ARENA_ROSTER`, or the built-in one.
pub(crate) fn load_roster(config: &CliConfig) -> Result<Roster> {
    match &config.roster_path {
        Some(path) => RosterLoader::load(path)
            .with_context(|| format!("loading roster from {}", path.display())),
        None => Ok(Roster::builtin()),
    }
}
