//! Periodic recompute timer for the deadline engine.
//!
//! The ticker is a spawned tokio task that pushes a tick into a channel
//! once per period. The owner receives ticks on the same thread that
//! applies user edits, so a recompute never interleaves with a mutation.
//! `stop()` or dropping the ticker aborts the task; a stopped ticker
//! yields no further ticks.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

/// Default recompute period.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(60 * 60);

const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug)]
pub struct RecomputeTicker {
    period: Duration,
    handle: Option<JoinHandle<()>>,
    rx: mpsc::Receiver<Instant>,
}

impl RecomputeTicker {
    /// Spawn the timer task. Must be called inside a tokio runtime.
    /// The first tick fires one full period after start.
    pub fn start(period: Duration) -> Self {
        let period = period.max(MIN_PERIOD);
        // One slot: a recompute pass is idempotent, so ticks that pile up
        // while the owner is busy collapse into one.
        let (tx, rx) = mpsc::channel(1);

        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                let at = interval.tick().await;
                match tx.try_send(at) {
                    Ok(()) | Err(mpsc::error::TrySendError::Full(_)) => {}
                    Err(mpsc::error::TrySendError::Closed(_)) => break,
                }
            }
        });

        debug!(period_secs = period.as_secs_f64(), "recompute ticker started");
        Self {
            period,
            handle: Some(handle),
            rx,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Wait for the next tick. Returns `None` once stopped.
    pub async fn tick(&mut self) -> Option<Instant> {
        if self.handle.is_none() {
            return None;
        }
        self.rx.recv().await
    }

    #[cfg(test)]
    pub(crate) fn abort_handle(&self) -> Option<tokio::task::AbortHandle> {
        self.handle.as_ref().map(JoinHandle::abort_handle)
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            self.rx.close();
            debug!("recompute ticker stopped");
        }
    }
}

impl Drop for RecomputeTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period() {
        let start = Instant::now();
        let mut ticker = RecomputeTicker::start(Duration::from_secs(3600));

        let first = ticker.tick().await.unwrap();
        let second = ticker.tick().await.unwrap();

        assert_eq!(first - start, Duration::from_secs(3600));
        assert_eq!(second - first, Duration::from_secs(3600));
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_ticker_yields_nothing() {
        let mut ticker = RecomputeTicker::start(Duration::from_secs(10));
        assert!(ticker.tick().await.is_some());

        ticker.stop();
        assert!(!ticker.is_running());
        assert!(ticker.tick().await.is_none());

        // stopping twice is harmless
        ticker.stop();
        assert!(ticker.tick().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn zero_period_is_clamped() {
        let mut ticker = RecomputeTicker::start(Duration::ZERO);
        assert_eq!(ticker.period(), MIN_PERIOD);
        assert!(ticker.tick().await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_aborts_task() {
        let ticker = RecomputeTicker::start(Duration::from_secs(1));
        let handle = ticker.abort_handle().unwrap();
        drop(ticker);
        for _ in 0..10 {
            if handle.is_finished() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(handle.is_finished());
    }
}
