//! Owned background task that keeps a [`CatalogStore`] fresh.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;

use crate::store::CatalogStore;

const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Handle to the periodic refresh loop.
///
/// The loop refreshes once immediately and then on every tick. Each tick's
/// refresh runs as its own task, so a slow load does not hold back the next
/// one; whichever finishes last wins. The loop stops on [`shutdown`] or when
/// the handle is dropped.
///
/// [`shutdown`]: RefreshTask::shutdown
pub struct RefreshTask {
    stop: watch::Sender<bool>,
    handle: Option<JoinHandle<()>>,
}

impl RefreshTask {
    /// Spawns the loop on the current tokio runtime.
    #[must_use]
    pub fn spawn(store: Arc<CatalogStore>, interval: Duration) -> Self {
        let (stop, mut stopped) = watch::channel(false);
        let period = interval.max(MIN_INTERVAL);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut inflight = JoinSet::new();

            loop {
                tokio::select! {
                    _ = stopped.changed() => break,
                    _ = ticker.tick() => {
                        while inflight.try_join_next().is_some() {}
                        let store = Arc::clone(&store);
                        inflight.spawn(async move {
                            store.refresh().await;
                        });
                    }
                }
            }

            inflight.shutdown().await;
            tracing::debug!("catalog refresh loop stopped");
        });

        tracing::info!(interval_secs = period.as_secs(), "catalog refresh loop started");
        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Stops the loop, cancels refreshes still in flight, and waits for it
    /// to exit.
    pub async fn shutdown(mut self) {
        let _ = self.stop.send(true);
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "catalog refresh loop ended abnormally");
            }
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }
}

impl Drop for RefreshTask {
    fn drop(&mut self) {
        let _ = self.stop.send(true);
    }
}
