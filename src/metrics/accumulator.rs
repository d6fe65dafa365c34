use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use super::types::{MetricsSnapshot, RequestOutcome};

/// Sentinel for "no minimum yet".
const UNSET_MIN_NS: u64 = u64::MAX;
/// Largest storable latency; keeps real samples distinct from the sentinel.
const MAX_RECORDED_NS: u64 = UNSET_MIN_NS.saturating_sub(1);

/// Lock-free sink for request outcomes shared by every worker of a run.
///
/// All updates use relaxed atomics. Joining the worker tasks establishes the
/// happens-before edge that makes the post-run [`snapshot`] exact.
///
/// [`snapshot`]: MetricsAccumulator::snapshot
#[derive(Debug)]
pub struct MetricsAccumulator {
    total: AtomicU64,
    success: AtomicU64,
    failure: AtomicU64,
    latency_sum_ns: AtomicU64,
    min_latency_ns: AtomicU64,
    max_latency_ns: AtomicU64,
}

impl Default for MetricsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsAccumulator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: AtomicU64::new(0),
            success: AtomicU64::new(0),
            failure: AtomicU64::new(0),
            latency_sum_ns: AtomicU64::new(0),
            min_latency_ns: AtomicU64::new(UNSET_MIN_NS),
            max_latency_ns: AtomicU64::new(0),
        }
    }

    /// Folds one outcome into the totals. Safe to call from many tasks at once.
    pub fn record(&self, outcome: &RequestOutcome) {
        let latency_ns = duration_to_ns(outcome.elapsed);

        add_saturating(&self.latency_sum_ns, latency_ns);
        lower_to(&self.min_latency_ns, latency_ns);
        raise_to(&self.max_latency_ns, latency_ns);

        if outcome.is_success() {
            self.success.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failure.fetch_add(1, Ordering::Relaxed);
        }
        self.total.fetch_add(1, Ordering::Relaxed);
    }

    /// Copies the current totals. Exact only once no `record` call is in flight.
    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        let min_ns = self.min_latency_ns.load(Ordering::Relaxed);
        MetricsSnapshot {
            total_requests: self.total.load(Ordering::Relaxed),
            successful_requests: self.success.load(Ordering::Relaxed),
            failed_requests: self.failure.load(Ordering::Relaxed),
            latency_sum: Duration::from_nanos(self.latency_sum_ns.load(Ordering::Relaxed)),
            min_latency: (min_ns != UNSET_MIN_NS).then_some(Duration::from_nanos(min_ns)),
            max_latency: Duration::from_nanos(self.max_latency_ns.load(Ordering::Relaxed)),
        }
    }
}

fn duration_to_ns(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos())
        .unwrap_or(MAX_RECORDED_NS)
        .min(MAX_RECORDED_NS)
}

fn add_saturating(cell: &AtomicU64, value: u64) {
    let mut current = cell.load(Ordering::Relaxed);
    loop {
        let next = current.saturating_add(value);
        match cell.compare_exchange_weak(current, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => break,
            Err(actual) => current = actual,
        }
    }
}

fn lower_to(cell: &AtomicU64, value: u64) {
    let mut current = cell.load(Ordering::Relaxed);
    while value < current {
        match cell.compare_exchange_weak(current, value, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => break,
            Err(actual) => current = actual,
        }
    }
}

fn raise_to(cell: &AtomicU64, value: u64) {
    let mut current = cell.load(Ordering::Relaxed);
    while value > current {
        match cell.compare_exchange_weak(current, value, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => break,
            Err(actual) => current = actual,
        }
    }
}
