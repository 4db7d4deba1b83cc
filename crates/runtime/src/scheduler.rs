//! Pacing abstraction for battle sessions.
//!
//! The battle runner never calls `tokio::time` directly; it asks a
//! [`Scheduler`] to wait. Production code uses [`TokioScheduler`], headless
//! runs use [`ImmediateScheduler`], and tests run the tokio scheduler under a
//! paused clock.

use std::time::Duration;

use async_trait::async_trait;

/// Something that can wait for a duration.
#[async_trait]
pub trait Scheduler: Send + Sync {
    async fn delay(&self, duration: Duration);
}

/// Waits on the tokio timer (real or paused time).
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn delay(&self, duration: Duration) {
        if duration.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(duration).await;
        }
    }
}

/// Never waits. Still yields so an abandon request can be observed between
/// turns.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateScheduler;

#[async_trait]
impl Scheduler for ImmediateScheduler {
    async fn delay(&self, _duration: Duration) {
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn tokio_scheduler_advances_virtual_time() {
        let start = tokio::time::Instant::now();
        TokioScheduler.delay(Duration::from_millis(1500)).await;
        assert_eq!(start.elapsed(), Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn immediate_scheduler_does_not_wait() {
        let start = tokio::time::Instant::now();
        ImmediateScheduler.delay(Duration::from_secs(60)).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
