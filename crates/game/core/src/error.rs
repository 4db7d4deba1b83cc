//! Record-level validation errors.
//!
//! A [`MonsterRecord`](crate::MonsterRecord) that breaks one of its invariants is
//! a caller contract violation. The engine refuses to build a session from it
//! and reports which field was wrong through [`InvalidMonster`].

/// One of the four combat attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AttributeKind {
    Strength,
    Speed,
    Intelligence,
    Stamina,
}

/// Invariant violations detected by [`MonsterRecord::validate`](crate::MonsterRecord::validate).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMonster {
    #[error("monster id must be non-zero")]
    ZeroId,

    #[error("monster {id} has an empty name")]
    EmptyName { id: i64 },

    #[error("monster {id} has level 0; levels start at 1")]
    ZeroLevel { id: i64 },

    #[error("monster {id} has {attribute} {value}, outside [{min}, {max}]")]
    AttributeOutOfRange {
        id: i64,
        attribute: AttributeKind,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("unknown elemental type {0:?}")]
    UnknownType(String),
}
