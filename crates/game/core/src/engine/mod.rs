//! Turn-based battle state machine.
//!
//! [`BattleEngine`] owns one battle session between two monsters. It never
//! sleeps or reads a clock: the caller decides when the next turn happens
//! ([`BattleEngine::resolve_turn`]) and when a second of the time budget has
//! elapsed ([`BattleEngine::tick_clock`]). The runtime crate drives both on a
//! real scheduler; [`BattleEngine::simulate`] drives them on a virtual clock.
//!
//! # Turn resolution
//!
//! ```text
//! attacker        = first on even turns, second on odd turns
//! roll            = uniform [0.8, 1.2)
//! type_modifier   = type_effectiveness(attacker, defender)
//! damage          = max(1, floor(power * roll * type_modifier * level_amplifier))
//! defender_health = max(0, defender_health - damage)
//! ```
//!
//! A defender at zero health ends the battle by knockout immediately, before
//! the clock is consulted again.

mod errors;
mod state;

pub use errors::BattleError;
pub use state::{BattleReport, BattleStatus, Side, TerminationReason, TurnRecord};

use crate::combat::damage::{ROLL_MAX, ROLL_MIN};
use crate::combat::{
    PowerModel, StandardPowerModel, apply_damage, calculate_damage, is_critical,
    type_effectiveness,
};
use crate::config::BattleConfig;
use crate::env::RandomSource;
use crate::monster::MonsterRecord;

const MILLIS_PER_SECOND: u64 = 1_000;

/// One battle session between two monsters.
///
/// Records are copied in at construction; later changes to the caller's
/// records (e.g. a level-up) do not affect a session in flight.
#[derive(Clone, Debug)]
pub struct BattleEngine<P = StandardPowerModel> {
    config: BattleConfig,
    combatants: [MonsterRecord; 2],
    power_model: P,
    health: [u32; 2],
    turn_index: u32,
    remaining_time: u32,
    log: Vec<String>,
    turns: Vec<TurnRecord>,
    status: BattleStatus,
    abandoned: bool,
}

impl BattleEngine<StandardPowerModel> {
    /// Creates a session using the standard power formula.
    ///
    /// Both records are validated; no session is created if either breaks a
    /// record invariant or if both sides are the same monster.
    pub fn new(
        first: MonsterRecord,
        second: MonsterRecord,
        config: BattleConfig,
    ) -> Result<Self, BattleError> {
        Self::with_power_model(first, second, config, StandardPowerModel)
    }
}

impl<P: PowerModel> BattleEngine<P> {
    /// Creates a session with a custom power model.
    pub fn with_power_model(
        first: MonsterRecord,
        second: MonsterRecord,
        config: BattleConfig,
        power_model: P,
    ) -> Result<Self, BattleError> {
        first
            .validate()
            .map_err(|source| BattleError::InvalidMonster {
                side: Side::First,
                source,
            })?;
        second
            .validate()
            .map_err(|source| BattleError::InvalidMonster {
                side: Side::Second,
                source,
            })?;
        if first.id == second.id {
            return Err(BattleError::DuplicateCombatant(first.id));
        }

        let health = config.starting_health;
        let remaining_time = config.time_budget_secs;
        Ok(Self {
            config,
            combatants: [first, second],
            power_model,
            health: [health; 2],
            turn_index: 0,
            remaining_time,
            log: Vec::new(),
            turns: Vec::new(),
            status: BattleStatus::NotStarted,
            abandoned: false,
        })
    }

    /// `NotStarted -> InProgress`.
    ///
    /// Resets health, turn index, time budget and log, then announces the
    /// matchup.
    pub fn start(&mut self) -> Result<(), BattleError> {
        if self.abandoned {
            return Ok(());
        }
        match self.status {
            BattleStatus::NotStarted => {}
            BattleStatus::InProgress => return Err(BattleError::AlreadyStarted),
            BattleStatus::Ended { .. } => return Err(BattleError::Ended),
        }

        self.health = [self.config.starting_health; 2];
        self.turn_index = 0;
        self.remaining_time = self.config.time_budget_secs;
        self.log.clear();
        self.turns.clear();
        self.status = BattleStatus::InProgress;

        let [first, second] = &self.combatants;
        let opening = format!("Battle begins: {} vs {}!", first.name, second.name);
        let budget = format!(
            "You have {} seconds to complete this battle!",
            self.config.time_budget_secs
        );
        self.log.push(opening);
        self.log.push(budget);
        Ok(())
    }

    /// Resolves the next turn.
    ///
    /// Returns `Ok(None)` without touching any state once the session has been
    /// abandoned.
    pub fn resolve_turn<R>(&mut self, rng: &mut R) -> Result<Option<&TurnRecord>, BattleError>
    where
        R: RandomSource + ?Sized,
    {
        if self.abandoned {
            return Ok(None);
        }
        self.ensure_in_progress()?;

        let attacker_side = Side::attacker_for_turn(self.turn_index);
        let defender_side = attacker_side.opponent();
        let attacker = &self.combatants[attacker_side.index()];
        let defender = &self.combatants[defender_side.index()];

        let attacker_power = self.power_model.power(attacker);
        let defender_power = self.power_model.power(defender);
        let type_modifier = type_effectiveness(attacker.elemental_type, defender.elemental_type);
        let roll = rng.range_f64(ROLL_MIN, ROLL_MAX);
        let moves = attacker.elemental_type.moves();
        let move_name = moves[rng.pick_index(moves.len())];

        let damage = calculate_damage(
            attacker_power,
            roll,
            type_modifier,
            attacker.level,
            defender.level,
        );
        let defender_health = apply_damage(self.health[defender_side.index()], damage);
        let critical = is_critical(roll);
        let knockout = defender_health == 0;

        let mut lines = vec![format!(
            "{} attacks with {}! Deals {} damage.",
            attacker.name, move_name, damage
        )];
        if type_modifier > 1.0 {
            lines.push("It's super effective!".to_string());
        } else if type_modifier < 1.0 {
            lines.push("It's not very effective...".to_string());
        }
        if critical {
            lines.push("Critical hit!".to_string());
        }
        if knockout {
            lines.push(format!("{} is victorious!", attacker.name));
        }

        let record = TurnRecord {
            turn: self.turn_index,
            attacker: attacker_side,
            attacker_id: attacker.id,
            defender_id: defender.id,
            move_name: move_name.to_string(),
            attacker_power,
            defender_power,
            roll,
            type_modifier,
            damage,
            defender_health,
            critical,
            knockout,
        };

        self.health[defender_side.index()] = defender_health;
        self.log.extend(lines);
        self.turns.push(record);

        if knockout {
            self.status = BattleStatus::Ended {
                winner: attacker_side,
                reason: TerminationReason::Knockout,
            };
        } else {
            self.turn_index += 1;
        }

        Ok(self.turns.last())
    }

    /// Consumes one second of the time budget.
    ///
    /// Returns the seconds left. When the budget reaches zero the battle ends
    /// on remaining health, the first combatant winning ties. Returns
    /// `Ok(None)` once the session has been abandoned.
    pub fn tick_clock(&mut self) -> Result<Option<u32>, BattleError> {
        if self.abandoned {
            return Ok(None);
        }
        self.ensure_in_progress()?;

        self.remaining_time = self.remaining_time.saturating_sub(1);
        if self.remaining_time == 0 {
            self.expire();
        }
        Ok(Some(self.remaining_time))
    }

    /// Marks the session abandoned.
    ///
    /// Not a terminal state of its own: the status is left as it was, but no
    /// further turn, tick or start has any effect.
    pub fn abandon(&mut self) {
        self.abandoned = true;
    }

    /// Runs the session to completion on a virtual clock.
    ///
    /// Starts the battle if needed. The first turn happens after
    /// `start_delay_ms`, later turns every `turn_delay_ms`, and one second of
    /// budget elapses per virtual second. A turn due at the same instant as a
    /// clock tick is resolved first. With zero delays the battle always ends by
    /// knockout.
    ///
    /// The virtual clock starts at zero, so a session already advanced with
    /// [`resolve_turn`](Self::resolve_turn) or [`tick_clock`](Self::tick_clock)
    /// is rejected with [`BattleError::AlreadyDriven`].
    pub fn simulate<R>(&mut self, rng: &mut R) -> Result<BattleReport, BattleError>
    where
        R: RandomSource + ?Sized,
    {
        if self.abandoned {
            return Err(BattleError::Abandoned);
        }
        match self.status {
            BattleStatus::NotStarted => self.start()?,
            BattleStatus::InProgress
                if self.turn_index > 0 || self.remaining_time < self.config.time_budget_secs =>
            {
                return Err(BattleError::AlreadyDriven);
            }
            BattleStatus::InProgress | BattleStatus::Ended { .. } => {}
        }

        let mut now_ms = self.config.start_delay_ms;
        let mut next_tick_ms = MILLIS_PER_SECOND;
        while self.is_in_progress() {
            while next_tick_ms < now_ms && self.is_in_progress() {
                self.tick_clock()?;
                next_tick_ms += MILLIS_PER_SECOND;
            }
            if !self.is_in_progress() {
                break;
            }
            self.resolve_turn(rng)?;
            now_ms += self.config.turn_delay_ms;
        }

        self.report().ok_or(BattleError::Ended)
    }

    /// Final report, available once the battle has ended.
    pub fn report(&self) -> Option<BattleReport> {
        let BattleStatus::Ended { winner, reason } = self.status else {
            return None;
        };
        let [first, second] = &self.combatants;
        Some(BattleReport {
            first: first.id,
            second: second.id,
            winner: self.combatants[winner.index()].id,
            winner_side: winner,
            reason,
            final_health: self.health,
            remaining_time: self.remaining_time,
            log: self.log.clone(),
            turns: self.turns.clone(),
        })
    }

    pub fn status(&self) -> BattleStatus {
        self.status
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == BattleStatus::InProgress
    }

    pub fn is_ended(&self) -> bool {
        self.status.is_ended()
    }

    pub fn is_abandoned(&self) -> bool {
        self.abandoned
    }

    pub fn combatant(&self, side: Side) -> &MonsterRecord {
        &self.combatants[side.index()]
    }

    pub fn health(&self, side: Side) -> u32 {
        self.health[side.index()]
    }

    pub fn turn_index(&self) -> u32 {
        self.turn_index
    }

    /// Side that attacks on the next resolved turn.
    pub fn next_attacker(&self) -> Side {
        Side::attacker_for_turn(self.turn_index)
    }

    pub fn remaining_time(&self) -> u32 {
        self.remaining_time
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn turns(&self) -> &[TurnRecord] {
        &self.turns
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    fn ensure_in_progress(&self) -> Result<(), BattleError> {
        match self.status {
            BattleStatus::InProgress => Ok(()),
            BattleStatus::NotStarted => Err(BattleError::NotStarted),
            BattleStatus::Ended { .. } => Err(BattleError::Ended),
        }
    }

    fn expire(&mut self) {
        let [first_health, second_health] = self.health;
        let winner = if first_health >= second_health {
            Side::First
        } else {
            Side::Second
        };
        let name = &self.combatants[winner.index()].name;
        let line = if first_health == second_health {
            format!("Time's up! Both monsters have {first_health} health; {name} wins the tie-break!")
        } else {
            format!("Time's up! {name} is victorious with more remaining health!")
        };
        self.log.push(line);
        self.status = BattleStatus::Ended {
            winner,
            reason: TerminationReason::TimeExpired,
        };
    }
}
