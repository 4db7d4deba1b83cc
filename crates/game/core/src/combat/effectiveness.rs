//! Type effectiveness chart.

use crate::monster::ElementalType;

/// Multiplier when the attacker's type is listed as advantaged.
pub const SUPER_EFFECTIVE: f64 = 1.5;
/// Multiplier when the defender's type is listed as advantaged.
pub const NOT_VERY_EFFECTIVE: f64 = 0.67;
/// Multiplier for every other pairing, including self-matchups.
pub const NEUTRAL: f64 = 1.0;

/// Damage multiplier for `attacker` hitting `defender`.
///
/// The chart is not symmetric: attacker advantages are checked first, then
/// defender advantages, and a pair listed in neither direction is neutral.
pub fn type_effectiveness(attacker: ElementalType, defender: ElementalType) -> f64 {
    if attacker.beats(defender) {
        SUPER_EFFECTIVE
    } else if defender.beats(attacker) {
        NOT_VERY_EFFECTIVE
    } else {
        NEUTRAL
    }
}
