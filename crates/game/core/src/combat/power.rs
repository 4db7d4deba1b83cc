//! Battle power model.
//!
//! # Formula
//!
//! ```text
//! power = mean(strength, speed, intelligence, stamina)
//!       + level * 1.5
//!       + 5 * (dna & 0x3FF) / 1023
//!       + type_bonus
//! ```

use crate::monster::MonsterRecord;

/// Power gained per level.
pub const LEVEL_FACTOR: f64 = 1.5;
/// Upper bound of the DNA jitter term.
pub const MAX_DNA_JITTER: f64 = 5.0;

const JITTER_MASK: u32 = 0x3FF;

/// Maps a monster record to the scalar that scales its attacks.
///
/// Implementations must be pure with respect to the record.
pub trait PowerModel {
    fn power(&self, monster: &MonsterRecord) -> f64;
}

/// The arena's power formula, see the module docs.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardPowerModel;

impl PowerModel for StandardPowerModel {
    fn power(&self, monster: &MonsterRecord) -> f64 {
        battle_power(monster)
    }
}

impl<F> PowerModel for F
where
    F: Fn(&MonsterRecord) -> f64,
{
    fn power(&self, monster: &MonsterRecord) -> f64 {
        self(monster)
    }
}

/// Battle power of a monster under the standard formula.
pub fn battle_power(monster: &MonsterRecord) -> f64 {
    monster.attributes.average()
        + f64::from(monster.level) * LEVEL_FACTOR
        + dna_jitter(monster.dna)
        + monster.elemental_type.power_bonus()
}

/// Deterministic jitter in `[0, 5]` from the low 10 bits of DNA.
pub fn dna_jitter(dna: u32) -> f64 {
    MAX_DNA_JITTER * f64::from(dna & JITTER_MASK) / f64::from(JITTER_MASK)
}
