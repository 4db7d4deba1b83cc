//! Battle event payloads.

use std::fmt;

use arena_core::{MonsterId, TerminationReason, TurnRecord};
use serde::{Deserialize, Serialize};

use super::bus::Topic;

/// Identifies one battle session within a runtime.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// Everything a running session reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BattleEvent {
    /// The session started; the opening log lines are included.
    Started {
        session: SessionId,
        first: MonsterId,
        second: MonsterId,
        time_budget_secs: u32,
        log: Vec<String>,
    },
    /// One turn was resolved, with the log lines it appended.
    TurnResolved {
        session: SessionId,
        record: TurnRecord,
        log: Vec<String>,
    },
    /// One second of the budget elapsed.
    ClockTick {
        session: SessionId,
        remaining_time: u32,
    },
    /// The battle reached a terminal state.
    Ended {
        session: SessionId,
        winner: MonsterId,
        reason: TerminationReason,
        final_health: [u32; 2],
    },
    /// The caller abandoned the session. Always the session's last event.
    Abandoned {
        session: SessionId,
        turns_resolved: u32,
    },
}

impl BattleEvent {
    pub fn topic(&self) -> Topic {
        match self {
            BattleEvent::ClockTick { .. } => Topic::Clock,
            BattleEvent::Started { .. }
            | BattleEvent::TurnResolved { .. }
            | BattleEvent::Ended { .. }
            | BattleEvent::Abandoned { .. } => Topic::Battle,
        }
    }

    pub fn session(&self) -> SessionId {
        match self {
            BattleEvent::Started { session, .. }
            | BattleEvent::TurnResolved { session, .. }
            | BattleEvent::ClockTick { session, .. }
            | BattleEvent::Ended { session, .. }
            | BattleEvent::Abandoned { session, .. } => *session,
        }
    }
}
