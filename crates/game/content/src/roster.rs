//! Computer-controlled opponents.
//!
//! The built-in roster holds ten monsters, a base and an evolved tier for each
//! elemental type. Their attributes are hand-tuned rather than derived from
//! DNA; the DNA is fixed and only its low nibble is meaningful (it encodes the
//! declared type).

use arena_core::{Attributes, ElementalType, InvalidMonster, MonsterId, MonsterRecord, NULL_OWNER};

/// One opponent in the roster.
#[derive(Clone, Debug, PartialEq)]
pub struct RosterEntry {
    pub record: MonsterRecord,
    pub description: String,
}

impl RosterEntry {
    pub fn level(&self) -> u32 {
        self.record.level
    }
}

/// Errors raised when assembling a roster.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RosterError {
    #[error("roster must contain at least one opponent")]
    Empty,

    #[error("opponent {id} must use a negative id")]
    NotBuiltin { id: MonsterId },

    #[error("opponent id {0} appears more than once")]
    DuplicateId(MonsterId),

    #[error("opponent {id} is invalid: {source}")]
    InvalidRecord {
        id: MonsterId,
        #[source]
        source: InvalidMonster,
    },

    #[error("opponent {id} declares {declared} but its dna encodes {encoded}")]
    TypeMismatch {
        id: MonsterId,
        declared: ElementalType,
        encoded: ElementalType,
    },
}

/// A validated, non-empty set of opponents.
#[derive(Clone, Debug, PartialEq)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Validates and wraps a list of opponents.
    ///
    /// Every record must satisfy the monster invariants, use a unique negative
    /// id and carry DNA that encodes its declared type.
    pub fn new(entries: Vec<RosterEntry>) -> Result<Self, RosterError> {
        if entries.is_empty() {
            return Err(RosterError::Empty);
        }

        let mut seen = Vec::with_capacity(entries.len());
        for entry in &entries {
            let record = &entry.record;
            if !record.id.is_builtin() {
                return Err(RosterError::NotBuiltin { id: record.id });
            }
            if seen.contains(&record.id) {
                return Err(RosterError::DuplicateId(record.id));
            }
            record
                .validate()
                .map_err(|source| RosterError::InvalidRecord {
                    id: record.id,
                    source,
                })?;
            let encoded = ElementalType::from_dna(record.dna);
            if encoded != record.elemental_type {
                return Err(RosterError::TypeMismatch {
                    id: record.id,
                    declared: record.elemental_type,
                    encoded,
                });
            }
            seen.push(record.id);
        }

        Ok(Self { entries })
    }

    /// The ten opponents shipped with the game.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN.iter().map(BuiltinOpponent::to_entry).collect(),
        }
    }

    pub fn get(&self, id: MonsterId) -> Option<&RosterEntry> {
        self.entries.iter().find(|entry| entry.record.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RosterEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A constructed roster is never empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::builtin()
    }
}

struct BuiltinOpponent {
    id: i64,
    name: &'static str,
    elemental_type: ElementalType,
    level: u32,
    dna: u32,
    attributes: Attributes,
    description: &'static str,
}

impl BuiltinOpponent {
    fn to_entry(&self) -> RosterEntry {
        RosterEntry {
            record: MonsterRecord {
                id: MonsterId(self.id),
                name: self.name.to_string(),
                level: self.level,
                dna: self.dna,
                elemental_type: self.elemental_type,
                attributes: self.attributes,
                owner: NULL_OWNER.to_string(),
            },
            description: self.description.to_string(),
        }
    }
}

#[rustfmt::skip]
const BUILTIN: [BuiltinOpponent; 10] = [
    BuiltinOpponent {
        id: -1, name: "Flameburst", elemental_type: ElementalType::Fire, level: 3,
        dna: 0x5A2D_4130, attributes: Attributes::new(65, 45, 30, 40),
        description: "A fast and aggressive fire monster with powerful attacks!",
    },
    BuiltinOpponent {
        id: -2, name: "Aquafin", elemental_type: ElementalType::Water, level: 4,
        dna: 0x6E38_5271, attributes: Attributes::new(40, 50, 60, 55),
        description: "A clever water monster that uses tactical moves and high intelligence.",
    },
    BuiltinOpponent {
        id: -3, name: "Terravore", elemental_type: ElementalType::Earth, level: 5,
        dna: 0x7B1C_4E82, attributes: Attributes::new(70, 25, 40, 75),
        description: "A durable earth monster with tremendous strength and defensive capabilities.",
    },
    BuiltinOpponent {
        id: -4, name: "Zephyros", elemental_type: ElementalType::Air, level: 4,
        dna: 0x4F6A_9C13, attributes: Attributes::new(35, 80, 50, 40),
        description: "An incredibly fast air monster that strikes before opponents can react.",
    },
    BuiltinOpponent {
        id: -5, name: "Voltshock", elemental_type: ElementalType::Electric, level: 5,
        dna: 0x3D8B_7A54, attributes: Attributes::new(55, 60, 65, 30),
        description: "A high-damage electric monster with devastating special attacks.",
    },
    BuiltinOpponent {
        id: -6, name: "Infernix", elemental_type: ElementalType::Fire, level: 8,
        dna: 0x8C5E_A3F0, attributes: Attributes::new(80, 65, 50, 60),
        description: "An evolved fire monster with mastery over flame and heat.",
    },
    BuiltinOpponent {
        id: -7, name: "Tsunamis", elemental_type: ElementalType::Water, level: 8,
        dna: 0x9D7C_B4E1, attributes: Attributes::new(60, 70, 85, 75),
        description: "An evolved water monster that can summon tidal waves to crush opponents.",
    },
    BuiltinOpponent {
        id: -8, name: "Mountainus", elemental_type: ElementalType::Earth, level: 9,
        dna: 0xA46B_6D92, attributes: Attributes::new(90, 40, 60, 95),
        description: "An evolved earth monster with nearly impenetrable defenses.",
    },
    BuiltinOpponent {
        id: -9, name: "Hurricane", elemental_type: ElementalType::Air, level: 7,
        dna: 0x7E9F_F2C3, attributes: Attributes::new(55, 100, 70, 60),
        description: "An evolved air monster that moves at the speed of wind.",
    },
    BuiltinOpponent {
        id: -10, name: "Thunderlord", elemental_type: ElementalType::Electric, level: 9,
        dna: 0x86B4_D7A4, attributes: Attributes::new(75, 80, 85, 50),
        description: "An evolved electric monster that harnesses storms to destroy opponents.",
    },
];
