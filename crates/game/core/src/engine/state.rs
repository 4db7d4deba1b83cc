//! Battle session types: sides, status, turn records and the final report.

use crate::monster::MonsterId;

/// Which of the two supplied combatants.
///
/// `First` is the monster passed first (the player's monster in the arena); it
/// attacks on even turns and wins timeout ties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Attacker for a given turn index: even turns belong to `First`.
    pub const fn attacker_for_turn(turn_index: u32) -> Self {
        if turn_index % 2 == 0 {
            Side::First
        } else {
            Side::Second
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Why a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TerminationReason {
    /// The defender's health reached zero.
    Knockout,
    /// The time budget ran out; decided on remaining health.
    TimeExpired,
}

/// Lifecycle of a battle: `NotStarted -> InProgress -> Ended`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleStatus {
    NotStarted,
    InProgress,
    Ended {
        winner: Side,
        reason: TerminationReason,
    },
}

impl BattleStatus {
    pub const fn is_ended(&self) -> bool {
        matches!(self, BattleStatus::Ended { .. })
    }
}

/// Everything that happened in one resolved turn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnRecord {
    /// Turn index at which this attack was resolved (starts at 0).
    pub turn: u32,
    pub attacker: Side,
    pub attacker_id: MonsterId,
    pub defender_id: MonsterId,
    pub move_name: String,
    pub attacker_power: f64,
    /// Computed for reporting; not used to mitigate damage.
    pub defender_power: f64,
    pub roll: f64,
    pub type_modifier: f64,
    pub damage: u32,
    /// Defender health after the attack.
    pub defender_health: u32,
    pub critical: bool,
    pub knockout: bool,
}

/// Result handed back to the caller once a battle has ended.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReport {
    pub first: MonsterId,
    pub second: MonsterId,
    pub winner: MonsterId,
    pub winner_side: Side,
    pub reason: TerminationReason,
    /// Remaining health of `[first, second]`.
    pub final_health: [u32; 2],
    /// Seconds left on the clock when the battle ended.
    pub remaining_time: u32,
    pub log: Vec<String>,
    pub turns: Vec<TurnRecord>,
}

impl BattleReport {
    /// Health of each side after every turn, starting from the opening values.
    pub fn health_trajectory(&self, starting_health: u32) -> Vec<[u32; 2]> {
        let mut current = [starting_health; 2];
        let mut trajectory = Vec::with_capacity(self.turns.len() + 1);
        trajectory.push(current);
        for turn in &self.turns {
            current[turn.attacker.opponent().index()] = turn.defender_health;
            trajectory.push(current);
        }
        trajectory
    }
}
