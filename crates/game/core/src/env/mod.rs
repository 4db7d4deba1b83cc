//! Capabilities injected into the engine from its environment.
//!
//! Only randomness lives here today; wall-clock pacing is driven by the caller
//! through [`crate::BattleEngine::tick_clock`].
mod rng;

pub use rng::{PcgRandom, RandomSource, ScriptedRandom};
