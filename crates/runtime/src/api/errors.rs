//! Unified error types surfaced by the runtime API.

use arena_core::BattleError;
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error("battle worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("battle worker result channel closed")]
    ResultChannelClosed(#[source] oneshot::error::RecvError),
}
