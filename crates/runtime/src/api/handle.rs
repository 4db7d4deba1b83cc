//! Caller-side handle to a running battle session.
//!
//! [`SessionHandle`] hides the channel plumbing between the caller and the
//! spawned battle worker: it can abandon the session, or wait for its outcome.

use std::sync::Arc;

use arena_core::{BattleReport, MonsterRecord};
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;

use super::errors::{Result, RuntimeError};
use crate::events::SessionId;

/// How a session finished.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// The battle ran to a terminal state.
    Completed(BattleReport),
    /// The caller abandoned the session first. Not an error.
    Abandoned { turns_resolved: u32 },
}

impl SessionOutcome {
    pub fn report(&self) -> Option<&BattleReport> {
        match self {
            SessionOutcome::Completed(report) => Some(report),
            SessionOutcome::Abandoned { .. } => None,
        }
    }

    pub fn into_report(self) -> Option<BattleReport> {
        match self {
            SessionOutcome::Completed(report) => Some(report),
            SessionOutcome::Abandoned { .. } => None,
        }
    }

    pub fn is_abandoned(&self) -> bool {
        matches!(self, SessionOutcome::Abandoned { .. })
    }
}

/// Cloneable abandon switch for a session.
///
/// Abandoning is idempotent and safe at any time, including after the session
/// has finished.
#[derive(Clone, Debug)]
pub struct AbandonToken {
    tx: Arc<watch::Sender<bool>>,
}

impl AbandonToken {
    pub(crate) fn new() -> (Self, watch::Receiver<bool>) {
        let (tx, rx) = watch::channel(false);
        (Self { tx: Arc::new(tx) }, rx)
    }

    pub fn abandon(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_abandoned(&self) -> bool {
        *self.tx.borrow()
    }
}

/// Client-facing handle to one battle session
///
/// Dropping the handle abandons the session, so a caller that walks away
/// leaves no worker behind. Use [`SessionHandle::wait`] to let it finish.
#[derive(Debug)]
pub struct SessionHandle {
    id: SessionId,
    first: MonsterRecord,
    second: MonsterRecord,
    abandon: AbandonToken,
    outcome_rx: oneshot::Receiver<Result<SessionOutcome>>,
    task: JoinHandle<()>,
}

impl SessionHandle {
    pub(crate) fn new(
        id: SessionId,
        combatants: [MonsterRecord; 2],
        abandon: AbandonToken,
        outcome_rx: oneshot::Receiver<Result<SessionOutcome>>,
        task: JoinHandle<()>,
    ) -> Self {
        let [first, second] = combatants;
        Self {
            id,
            first,
            second,
            abandon,
            outcome_rx,
            task,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The player's side (attacks first).
    pub fn first(&self) -> &MonsterRecord {
        &self.first
    }

    pub fn second(&self) -> &MonsterRecord {
        &self.second
    }

    /// Stop the session. No turn or tick is processed afterwards.
    pub fn abandon(&self) {
        self.abandon.abandon();
    }

    pub fn abandon_token(&self) -> AbandonToken {
        self.abandon.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the session to finish.
    pub async fn wait(mut self) -> Result<SessionOutcome> {
        (&mut self.task).await.map_err(RuntimeError::WorkerJoin)?;
        (&mut self.outcome_rx)
            .await
            .map_err(RuntimeError::ResultChannelClosed)?
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        self.abandon.abandon();
    }
}
