//! Deterministic battle rules for on-chain collectible monsters.
//!
//! `arena-core` defines the canonical rules (DNA derivation, type chart,
//! battle power, damage) and the [`engine::BattleEngine`] state machine that
//! turns two [`MonsterRecord`]s into a battle log and a winner. Everything here
//! is pure: randomness arrives through [`RandomSource`] and wall-clock pacing
//! is driven from outside (see the `arena-runtime` crate).
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod monster;

pub use combat::{
    PowerModel, StandardPowerModel, apply_damage, battle_power, calculate_damage,
    level_amplifier, type_effectiveness,
};
pub use config::BattleConfig;
pub use engine::{
    BattleEngine, BattleError, BattleReport, BattleStatus, Side, TerminationReason, TurnRecord,
};
pub use env::{PcgRandom, RandomSource, ScriptedRandom};
pub use error::{AttributeKind, InvalidMonster};
pub use monster::{
    Attributes, DerivedTraits, ElementalType, MonsterId, MonsterRecord, NULL_OWNER, derive_traits,
    evolution_stage, generate_dna,
};
