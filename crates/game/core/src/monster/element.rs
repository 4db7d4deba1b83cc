//! Elemental types and their per-type tables.
//!
//! The set of types is closed, so every per-type concern (flat power bonus,
//! advantage list, flavor moves) is an exhaustive `match` rather than a keyed
//! table with a silent default.

/// Elemental affinity of a monster.
///
/// The declaration order is significant: it is the index used when deriving a
/// type from DNA (`Fire = 0 .. Electric = 4`).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ElementalType {
    Fire,
    Water,
    Earth,
    Air,
    Electric,
}

impl ElementalType {
    /// All types in DNA index order.
    pub const ALL: [ElementalType; 5] = [
        ElementalType::Fire,
        ElementalType::Water,
        ElementalType::Earth,
        ElementalType::Air,
        ElementalType::Electric,
    ];

    /// Position of this type in [`Self::ALL`].
    pub const fn index(self) -> u32 {
        match self {
            Self::Fire => 0,
            Self::Water => 1,
            Self::Earth => 2,
            Self::Air => 3,
            Self::Electric => 4,
        }
    }

    /// Type encoded in the low nibble of a DNA value.
    pub const fn from_dna(dna: u32) -> Self {
        Self::ALL[((dna & 0xF) % 5) as usize]
    }

    /// Flat bonus added to battle power. Intentionally unbalanced.
    pub const fn power_bonus(self) -> f64 {
        match self {
            Self::Fire => 1.2,
            Self::Water => 1.0,
            Self::Earth => 1.5,
            Self::Air => 0.8,
            Self::Electric => 1.3,
        }
    }

    /// The two types this type deals super-effective damage to.
    pub const fn advantages(self) -> [ElementalType; 2] {
        match self {
            Self::Fire => [Self::Earth, Self::Air],
            Self::Water => [Self::Fire, Self::Electric],
            Self::Earth => [Self::Electric, Self::Water],
            Self::Air => [Self::Earth, Self::Water],
            Self::Electric => [Self::Air, Self::Fire],
        }
    }

    /// Returns true if `self` is listed as advantaged over `other`.
    pub fn beats(self, other: ElementalType) -> bool {
        self.advantages().contains(&other)
    }

    /// Flavor move names used in battle log lines.
    pub const fn moves(self) -> [&'static str; 5] {
        match self {
            Self::Fire => [
                "Flame Burst",
                "Inferno",
                "Fire Blast",
                "Heat Wave",
                "Burning Slash",
            ],
            Self::Water => [
                "Hydro Pump",
                "Tsunami",
                "Aqua Jet",
                "Water Cannon",
                "Whirlpool",
            ],
            Self::Earth => [
                "Rock Slide",
                "Earthquake",
                "Ground Pound",
                "Boulder Crash",
                "Seismic Slam",
            ],
            Self::Air => [
                "Tornado",
                "Hurricane",
                "Wind Slash",
                "Air Cutter",
                "Cyclone",
            ],
            Self::Electric => [
                "Lightning Bolt",
                "Thunder Shock",
                "Volt Tackle",
                "Electric Surge",
                "Thunderwave",
            ],
        }
    }
}
