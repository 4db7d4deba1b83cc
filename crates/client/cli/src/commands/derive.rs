//! `arena derive`: show what a DNA value turns into.

use anyhow::Result;
use arena_core::{MonsterId, MonsterRecord, NULL_OWNER, battle_power};
use clap::Args;

use super::parse_dna;

/// Derive type, attributes and battle power from DNA
#[derive(Args, Debug)]
pub struct DeriveArgs {
    /// DNA value (decimal or 0x-prefixed hex)
    #[arg(long, value_parser = parse_dna)]
    pub dna: u32,

    /// Level used for the battle power estimate
    #[arg(long, default_value_t = 1)]
    pub level: u32,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl DeriveArgs {
    pub fn execute(self) -> Result<()> {
        let level = self.level.max(1);
        let record = MonsterRecord::from_dna(MonsterId(1), "specimen", level, self.dna, NULL_OWNER);
        let power = battle_power(&record);
        let attrs = record.attributes;

        if self.json {
            let value = serde_json::json!({
                "dna": self.dna,
                "elemental_type": record.elemental_type,
                "attributes": attrs,
                "level": level,
                "evolution_stage": record.evolution_stage(),
                "battle_power": power,
                "moves": record.elemental_type.moves(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
            return Ok(());
        }

        println!("DNA          {:#010x}", self.dna);
        println!("Type         {}", record.elemental_type);
        println!("Strength     {}", attrs.strength);
        println!("Speed        {}", attrs.speed);
        println!("Intelligence {}", attrs.intelligence);
        println!("Stamina      {}", attrs.stamina);
        println!("Stage        {} (level {level})", record.evolution_stage());
        println!("Power        {power:.2}");
        println!("Moves        {}", record.elemental_type.moves().join(", "));
        Ok(())
    }
}
