//! Combat attributes and their derivation from DNA.
//!
//! ```text
//! bits 24..31   16..23         8..15   0..7
//!      stamina  intelligence   speed   strength
//! ```
//!
//! Each byte is scaled linearly from `[0, 255]` to `[0, 100]` (floor) and then
//! clamped into [`Attributes::MIN`]..=[`Attributes::MAX`].

use crate::error::{AttributeKind, InvalidMonster};

use super::element::ElementalType;

/// The four combat attributes of a monster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub strength: u32,
    pub speed: u32,
    pub intelligence: u32,
    pub stamina: u32,
}

impl Attributes {
    pub const MIN: u32 = 10;
    pub const MAX: u32 = 100;

    pub const fn new(strength: u32, speed: u32, intelligence: u32, stamina: u32) -> Self {
        Self {
            strength,
            speed,
            intelligence,
            stamina,
        }
    }

    /// Derive attributes from the four bytes of a DNA value.
    pub const fn from_dna(dna: u32) -> Self {
        Self {
            strength: normalize_byte(dna as u8),
            speed: normalize_byte((dna >> 8) as u8),
            intelligence: normalize_byte((dna >> 16) as u8),
            stamina: normalize_byte((dna >> 24) as u8),
        }
    }

    pub const fn get(&self, kind: AttributeKind) -> u32 {
        match kind {
            AttributeKind::Strength => self.strength,
            AttributeKind::Speed => self.speed,
            AttributeKind::Intelligence => self.intelligence,
            AttributeKind::Stamina => self.stamina,
        }
    }

    /// Attributes paired with their kind, in bit-field order.
    pub const fn entries(&self) -> [(AttributeKind, u32); 4] {
        [
            (AttributeKind::Strength, self.strength),
            (AttributeKind::Speed, self.speed),
            (AttributeKind::Intelligence, self.intelligence),
            (AttributeKind::Stamina, self.stamina),
        ]
    }

    pub const fn total(&self) -> u32 {
        self.strength + self.speed + self.intelligence + self.stamina
    }

    pub fn average(&self) -> f64 {
        f64::from(self.total()) / 4.0
    }

    /// Checks that every attribute lies in the published range.
    ///
    /// `id` is only used to label the error.
    pub fn validate(&self, id: i64) -> Result<(), InvalidMonster> {
        for (attribute, value) in self.entries() {
            if !(Self::MIN..=Self::MAX).contains(&value) {
                return Err(InvalidMonster::AttributeOutOfRange {
                    id,
                    attribute,
                    value,
                    min: Self::MIN,
                    max: Self::MAX,
                });
            }
        }
        Ok(())
    }
}

/// Scale one DNA byte into the attribute range.
///
/// `byte * 100 / 255` is the integer form of `floor(byte / 2.55)`.
const fn normalize_byte(byte: u8) -> u32 {
    let scaled = byte as u32 * 100 / 255;
    if scaled < Attributes::MIN {
        Attributes::MIN
    } else if scaled > Attributes::MAX {
        Attributes::MAX
    } else {
        scaled
    }
}

/// Everything the deriver produces from one DNA value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedTraits {
    pub elemental_type: ElementalType,
    pub attributes: Attributes,
}

/// Derive elemental type and attributes from DNA.
///
/// Total and pure: every `u32` is a valid input and the same input always
/// yields the same output.
pub const fn derive_traits(dna: u32) -> DerivedTraits {
    DerivedTraits {
        elemental_type: ElementalType::from_dna(dna),
        attributes: Attributes::from_dna(dna),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_fields_map_to_attributes() {
        // strength=0xFF, speed=0x80, intelligence=0x33, stamina=0x00
        let attrs = Attributes::from_dna(0x00_33_80_FF);
        assert_eq!(attrs.strength, 100);
        assert_eq!(attrs.speed, 50); // 128 * 100 / 255 = 50
        assert_eq!(attrs.intelligence, 20); // 51 / 2.55 = 20
        assert_eq!(attrs.stamina, 10); // clamped up from 0
    }

    #[test]
    fn normalization_matches_float_formula() {
        for byte in 0..=255u8 {
            let float = (f64::from(byte) / 2.55).floor() as u32;
            let expected = float.clamp(Attributes::MIN, Attributes::MAX);
            assert_eq!(normalize_byte(byte), expected, "byte {byte}");
        }
    }

    #[test]
    fn derivation_is_deterministic_and_in_range() {
        // Walk a spread of DNA values, including both extremes.
        let mut dna: u32 = 0;
        for step in 0..10_000u32 {
            let first = derive_traits(dna);
            let second = derive_traits(dna);
            assert_eq!(first, second);
            assert!(first.attributes.validate(1).is_ok(), "dna {dna:#010x}");
            dna = dna.wrapping_add(0x0006_8DB9).wrapping_mul(step | 1);
        }
        assert!(derive_traits(u32::MAX).attributes.validate(1).is_ok());
        assert!(derive_traits(0).attributes.validate(1).is_ok());
    }

    #[test]
    fn validate_reports_offending_attribute() {
        let attrs = Attributes::new(50, 101, 50, 50);
        let err = attrs.validate(7).unwrap_err();
        assert_eq!(
            err,
            InvalidMonster::AttributeOutOfRange {
                id: 7,
                attribute: AttributeKind::Speed,
                value: 101,
                min: 10,
                max: 100,
            }
        );
    }

    #[test]
    fn average_uses_all_four() {
        assert_eq!(Attributes::new(80, 65, 50, 60).average(), 63.75);
    }
}
