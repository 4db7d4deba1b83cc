//! Damage calculation and application.

/// Lowest effectiveness roll.
pub const ROLL_MIN: f64 = 0.8;
/// Highest effectiveness roll.
pub const ROLL_MAX: f64 = 1.2;
/// Rolls strictly above this are reported as critical hits.
pub const CRITICAL_THRESHOLD: f64 = 1.1;
/// Extra damage per level the attacker is above the defender.
pub const LEVEL_ADVANTAGE_STEP: f64 = 0.05;
/// Every connecting attack deals at least this much.
pub const MINIMUM_DAMAGE: u32 = 1;

/// Multiplier for attacking a lower-level defender.
///
/// `1 + 0.05 * (attacker - defender)` when the attacker is higher, otherwise
/// exactly 1 (there is no penalty for attacking upwards).
pub fn level_amplifier(attacker_level: u32, defender_level: u32) -> f64 {
    if attacker_level > defender_level {
        1.0 + LEVEL_ADVANTAGE_STEP * f64::from(attacker_level - defender_level)
    } else {
        1.0
    }
}

/// Calculate the damage of one attack.
///
/// # Formula
///
/// ```text
/// raw   = attacker_power * roll * type_modifier * level_amplifier
/// final = max(1, floor(raw))
/// ```
///
/// Defender power plays no part: damage is driven by the attacker alone.
pub fn calculate_damage(
    attacker_power: f64,
    roll: f64,
    type_modifier: f64,
    attacker_level: u32,
    defender_level: u32,
) -> u32 {
    let raw = attacker_power
        * roll
        * type_modifier
        * level_amplifier(attacker_level, defender_level);

    // `as` saturates: negative or NaN collapses to 0 and is lifted by the floor.
    (raw.floor() as u32).max(MINIMUM_DAMAGE)
}

/// Apply damage to current health, clamped at 0.
pub fn apply_damage(current_health: u32, damage: u32) -> u32 {
    current_health.saturating_sub(damage)
}

/// Whether a roll is reported as a critical hit.
pub fn is_critical(roll: f64) -> bool {
    roll > CRITICAL_THRESHOLD
}
