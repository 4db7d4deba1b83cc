//! Arena content: the built-in opponent roster, level-banded opponent
//! selection, and loaders for RON/TOML data files.
//!
//! Content is consumed by the runtime and the CLI; the battle engine itself
//! only ever sees resolved [`arena_core::MonsterRecord`]s.

pub mod roster;
pub mod selector;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use roster::{Roster, RosterEntry, RosterError};
pub use selector::{LevelBand, OpponentSelector};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, RosterEntrySpec, RosterLoader};
