//! Runtime orchestration for arena battles.
//!
//! This crate drives [`arena_core::BattleEngine`] sessions in real (or paused)
//! time. Consumers embed [`Runtime`] to start battles, subscribe to events,
//! and abandon or await sessions through [`SessionHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`scheduler`] abstracts pacing so tests and headless runs skip waiting
//! - [`random`] provides the entropy-backed random source
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod random;
pub mod runtime;
pub mod scheduler;

mod workers;

pub use api::{AbandonToken, Result, RuntimeError, SessionHandle, SessionOutcome};
pub use events::{BattleEvent, EventBus, SessionId, Topic};
pub use random::StdRandom;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use scheduler::{ImmediateScheduler, Scheduler, TokioScheduler};
