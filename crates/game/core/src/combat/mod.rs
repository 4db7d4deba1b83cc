//! Combat math.
//!
//! Pure functions used by the battle engine on every turn.
//!
//! # Core Functions
//!
//! - `battle_power`: attacker strength scalar from a monster record
//! - `type_effectiveness`: elemental multiplier for an attacker/defender pair
//! - `calculate_damage`: power, roll, type and level advantage to final damage
//! - `apply_damage`: health reduction (clamped to 0)

pub mod damage;
pub mod effectiveness;
pub mod power;

pub use damage::{apply_damage, calculate_damage, is_critical, level_amplifier};
pub use effectiveness::type_effectiveness;
pub use power::{PowerModel, StandardPowerModel, battle_power, dna_jitter};
