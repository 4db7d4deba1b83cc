//! Battle worker that owns one [`BattleEngine`] session.
//!
//! The worker walks two deadline streams measured from session start: turns
//! (first after `start_delay_ms`, then every `turn_delay_ms`) and clock ticks
//! (every second). It waits for whichever is next through the [`Scheduler`],
//! racing the wait against the abandon signal. A turn due at the same instant
//! as a tick is resolved first, so a knockout always beats the timer.

use std::sync::Arc;
use std::time::Duration;

use arena_core::{BattleEngine, BattleError, RandomSource, Side};
use tokio::sync::watch;
use tracing::{debug, info, trace};

use crate::api::SessionOutcome;
use crate::events::{BattleEvent, EventBus, SessionId};
use crate::scheduler::Scheduler;

const TICK_MS: u64 = 1_000;

/// Next thing the worker waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deadline {
    Turn(u64),
    Tick(u64),
}

impl Deadline {
    fn at(self) -> u64 {
        match self {
            Deadline::Turn(at) | Deadline::Tick(at) => at,
        }
    }
}

pub(crate) struct BattleRunner<R> {
    session: SessionId,
    engine: BattleEngine,
    rng: R,
    scheduler: Arc<dyn Scheduler>,
    event_bus: EventBus,
    abandon_rx: watch::Receiver<bool>,
}

impl<R: RandomSource> BattleRunner<R> {
    pub(crate) fn new(
        session: SessionId,
        engine: BattleEngine,
        rng: R,
        scheduler: Arc<dyn Scheduler>,
        event_bus: EventBus,
        abandon_rx: watch::Receiver<bool>,
    ) -> Self {
        Self {
            session,
            engine,
            rng,
            scheduler,
            event_bus,
            abandon_rx,
        }
    }

    /// Main worker loop.
    pub(crate) async fn run(mut self) -> Result<SessionOutcome, BattleError> {
        if *self.abandon_rx.borrow() {
            return Ok(self.abandon());
        }
        self.start()?;

        let config = self.engine.config().clone();
        let mut now_ms = 0;
        let mut next_turn_ms = config.start_delay_ms;
        let mut next_tick_ms = TICK_MS;

        loop {
            let deadline = if next_turn_ms <= next_tick_ms {
                Deadline::Turn(next_turn_ms)
            } else {
                Deadline::Tick(next_tick_ms)
            };
            let wait = Duration::from_millis(deadline.at().saturating_sub(now_ms));

            let abandoned = tokio::select! {
                biased;
                () = abandon_signal(&mut self.abandon_rx) => true,
                () = self.scheduler.delay(wait) => false,
            };
            if abandoned {
                return Ok(self.abandon());
            }
            now_ms = deadline.at();

            match deadline {
                Deadline::Turn(_) => {
                    self.resolve_turn()?;
                    next_turn_ms += config.turn_delay_ms;
                }
                Deadline::Tick(_) => {
                    self.tick_clock()?;
                    next_tick_ms += TICK_MS;
                }
            }

            if let Some(report) = self.engine.report() {
                info!(
                    session = %self.session,
                    winner = %report.winner,
                    reason = %report.reason,
                    turns = report.turns.len(),
                    "battle ended"
                );
                self.event_bus.publish(BattleEvent::Ended {
                    session: self.session,
                    winner: report.winner,
                    reason: report.reason,
                    final_health: report.final_health,
                });
                return Ok(SessionOutcome::Completed(report));
            }
        }
    }

    fn start(&mut self) -> Result<(), BattleError> {
        self.engine.start()?;

        let first = self.engine.combatant(Side::First);
        let second = self.engine.combatant(Side::Second);
        info!(
            session = %self.session,
            first = %first.name,
            second = %second.name,
            "battle started"
        );
        self.event_bus.publish(BattleEvent::Started {
            session: self.session,
            first: first.id,
            second: second.id,
            time_budget_secs: self.engine.config().time_budget_secs,
            log: self.engine.log().to_vec(),
        });
        Ok(())
    }

    fn resolve_turn(&mut self) -> Result<(), BattleError> {
        let log_before = self.engine.log().len();
        let Some(record) = self.engine.resolve_turn(&mut self.rng)?.cloned() else {
            return Ok(());
        };

        debug!(
            session = %self.session,
            turn = record.turn,
            attacker = %record.attacker,
            damage = record.damage,
            defender_health = record.defender_health,
            "turn resolved"
        );
        let log = self.engine.log()[log_before..].to_vec();
        self.event_bus.publish(BattleEvent::TurnResolved {
            session: self.session,
            record,
            log,
        });
        Ok(())
    }

    fn tick_clock(&mut self) -> Result<(), BattleError> {
        let Some(remaining_time) = self.engine.tick_clock()? else {
            return Ok(());
        };

        trace!(session = %self.session, remaining_time, "clock tick");
        self.event_bus.publish(BattleEvent::ClockTick {
            session: self.session,
            remaining_time,
        });
        Ok(())
    }

    fn abandon(&mut self) -> SessionOutcome {
        self.engine.abandon();
        let turns_resolved = self.engine.turns().len() as u32;

        info!(session = %self.session, turns_resolved, "battle abandoned");
        self.event_bus.publish(BattleEvent::Abandoned {
            session: self.session,
            turns_resolved,
        });
        SessionOutcome::Abandoned { turns_resolved }
    }
}

/// Resolves once the session is abandoned.
///
/// Pends forever if every abandon token was dropped without abandoning.
async fn abandon_signal(rx: &mut watch::Receiver<bool>) {
    if rx.wait_for(|abandoned| *abandoned).await.is_err() {
        std::future::pending::<()>().await;
    }
}
