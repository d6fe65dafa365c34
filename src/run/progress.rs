use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{MissedTickBehavior, interval};
use tracing::info;

use crate::metrics::MetricsAccumulator;

/// Logs approximate totals every `every` until `done_rx` flips to true.
pub(super) fn spawn_progress_reporter(
    accumulator: Arc<MetricsAccumulator>,
    every: Duration,
    expected_total: u64,
    mut done_rx: watch::Receiver<bool>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;

        loop {
            tokio::select! {
                changed = done_rx.changed() => {
                    if changed.is_err() || *done_rx.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    let snapshot = accumulator.snapshot();
                    info!(
                        "Progress: {}/{} requests ({} ok, {} failed)",
                        snapshot.total_requests,
                        expected_total,
                        snapshot.successful_requests,
                        snapshot.failed_requests
                    );
                }
            }
        }
    })
}
