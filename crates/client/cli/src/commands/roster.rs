//! `arena roster`: list computer-controlled opponents.

use anyhow::Result;
use arena_content::{LevelBand, OpponentSelector};
use clap::Args;

use super::load_roster;
use crate::config::CliConfig;

/// List the opponent roster
#[derive(Args, Debug)]
pub struct RosterArgs {
    /// Only show opponents eligible for this player level
    #[arg(long)]
    pub level: Option<u32>,
}

impl RosterArgs {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let roster = load_roster(config)?;
        let entries = match self.level {
            Some(level) => {
                println!(
                    "Opponents for a level {level} monster ({} band):",
                    LevelBand::for_player_level(level)
                );
                OpponentSelector::new(&roster).eligible(level)
            }
            None => roster.iter().collect(),
        };

        for entry in entries {
            let record = &entry.record;
            let attrs = record.attributes;
            println!(
                "{:>4}  {:<12} {:<8} lv {:<2}  str {:>3} spd {:>3} int {:>3} sta {:>3}",
                record.id.0,
                record.name,
                record.elemental_type.as_ref(),
                record.level,
                attrs.strength,
                attrs.speed,
                attrs.intelligence,
                attrs.stamina,
            );
            if !entry.description.is_empty() {
                println!("      {}", entry.description);
            }
        }
        Ok(())
    }
}
