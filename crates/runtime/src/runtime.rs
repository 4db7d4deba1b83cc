//! High-level runtime orchestrator.
//!
//! The runtime spawns one battle worker per session, wires up the abandon and
//! result channels, and exposes a builder-based API for clients to start
//! battles.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arena_content::{OpponentSelector, Roster};
use arena_core::{BattleConfig, BattleEngine, MonsterRecord, RandomSource, Side};
use tokio::sync::{broadcast, oneshot};
use tracing::debug;

use crate::api::{AbandonToken, Result, RuntimeError, SessionHandle};
use crate::events::{BattleEvent, EventBus, SessionId, Topic};
use crate::scheduler::{Scheduler, TokioScheduler};
use crate::workers::BattleRunner;

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub battle: BattleConfig,
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::default(),
            event_buffer_size: 100,
        }
    }
}

/// Main runtime that hosts battle sessions
///
/// Sessions share nothing but the event bus; each one runs on its own task.
pub struct Runtime {
    config: RuntimeConfig,
    event_bus: EventBus,
    scheduler: Arc<dyn Scheduler>,
    roster: Roster,
    next_session: AtomicU64,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Subscribe to events from a specific topic
    ///
    /// Subscribe before starting a session to see its `Started` event.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<BattleEvent> {
        self.event_bus.subscribe(topic)
    }

    /// Start a battle between two resolved records.
    ///
    /// Both records are validated before anything is spawned; an invalid
    /// record returns an error and creates no session. Must be called from
    /// within a tokio runtime.
    pub fn start_battle<R>(
        &self,
        first: MonsterRecord,
        second: MonsterRecord,
        rng: R,
    ) -> Result<SessionHandle>
    where
        R: RandomSource + Send + 'static,
    {
        let engine = BattleEngine::new(first, second, self.config.battle.clone())?;
        let combatants = [
            engine.combatant(Side::First).clone(),
            engine.combatant(Side::Second).clone(),
        ];

        let id = SessionId(self.next_session.fetch_add(1, Ordering::Relaxed));
        let (abandon, abandon_rx) = AbandonToken::new();
        let (outcome_tx, outcome_rx) = oneshot::channel();
        let runner = BattleRunner::new(
            id,
            engine,
            rng,
            Arc::clone(&self.scheduler),
            self.event_bus.clone(),
            abandon_rx,
        );

        let task = tokio::spawn(async move {
            let outcome = runner.run().await.map_err(RuntimeError::from);
            if outcome_tx.send(outcome).is_err() {
                debug!(session = %id, "outcome receiver dropped");
            }
        });

        Ok(SessionHandle::new(id, combatants, abandon, outcome_rx, task))
    }

    /// Start a battle against an opponent picked from the roster for the
    /// player's level. The same random source drives the pick and the battle.
    pub fn start_vs_random_opponent<R>(
        &self,
        player: MonsterRecord,
        mut rng: R,
    ) -> Result<SessionHandle>
    where
        R: RandomSource + Send + 'static,
    {
        let opponent = OpponentSelector::new(&self.roster)
            .select(player.level, &mut rng)
            .record
            .clone();
        debug!(opponent = %opponent.name, level = opponent.level, "opponent selected");
        self.start_battle(player, opponent, rng)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    scheduler: Option<Arc<dyn Scheduler>>,
    roster: Option<Roster>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            scheduler: None,
            roster: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override only the battle configuration
    pub fn battle_config(mut self, battle: BattleConfig) -> Self {
        self.config.battle = battle;
        self
    }

    /// Set the pacing scheduler (default: [`TokioScheduler`])
    pub fn scheduler(mut self, scheduler: impl Scheduler + 'static) -> Self {
        self.scheduler = Some(Arc::new(scheduler));
        self
    }

    /// Replace the built-in opponent roster
    pub fn roster(mut self, roster: Roster) -> Self {
        self.roster = Some(roster);
        self
    }

    pub fn build(self) -> Runtime {
        Runtime {
            event_bus: EventBus::with_capacity(self.config.event_buffer_size),
            config: self.config,
            scheduler: self
                .scheduler
                .unwrap_or_else(|| Arc::new(TokioScheduler)),
            roster: self.roster.unwrap_or_else(Roster::builtin),
            next_session: AtomicU64::new(1),
        }
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
