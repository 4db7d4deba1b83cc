//! Monster records and DNA derivation.
//!
//! A [`MonsterRecord`] is the unit the battle engine operates on. Records built
//! from raw DNA always go through [`derive_traits`]; the engine never re-derives
//! anything and trusts the record's `elemental_type` and `attributes`.

mod attributes;
mod dna;
mod element;

pub use attributes::{Attributes, DerivedTraits, derive_traits};
pub use dna::{evolution_stage, generate_dna};
pub use element::ElementalType;

use crate::error::InvalidMonster;

/// Monster identifier.
///
/// Positive ids belong to player-owned (minted) monsters; negative ids are the
/// built-in computer opponents. Zero is never a valid id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MonsterId(pub i64);

impl MonsterId {
    pub const fn is_builtin(self) -> bool {
        self.0 < 0
    }

    pub const fn is_player_owned(self) -> bool {
        self.0 > 0
    }
}

impl std::fmt::Display for MonsterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owner reference used for built-in opponents.
pub const NULL_OWNER: &str = "0x0000000000000000000000000000000000000000";

/// A fully resolved monster as consumed by the battle engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterRecord {
    pub id: MonsterId,
    pub name: String,
    pub level: u32,
    pub dna: u32,
    pub elemental_type: ElementalType,
    pub attributes: Attributes,
    /// Opaque owner identity (e.g. a chain address). Never interpreted here.
    pub owner: String,
}

impl MonsterRecord {
    /// Build a record from raw on-chain data, deriving type and attributes.
    pub fn from_dna(
        id: MonsterId,
        name: impl Into<String>,
        level: u32,
        dna: u32,
        owner: impl Into<String>,
    ) -> Self {
        let traits = derive_traits(dna);
        Self {
            id,
            name: name.into(),
            level,
            dna,
            elemental_type: traits.elemental_type,
            attributes: traits.attributes,
            owner: owner.into(),
        }
    }

    /// Checks the record invariants: non-zero id, non-empty name, level of at
    /// least 1 and attributes within range.
    pub fn validate(&self) -> Result<(), InvalidMonster> {
        let id = self.id.0;
        if id == 0 {
            return Err(InvalidMonster::ZeroId);
        }
        if self.name.trim().is_empty() {
            return Err(InvalidMonster::EmptyName { id });
        }
        if self.level == 0 {
            return Err(InvalidMonster::ZeroLevel { id });
        }
        self.attributes.validate(id)
    }

    pub const fn evolution_stage(&self) -> u8 {
        evolution_stage(self.level)
    }
}
