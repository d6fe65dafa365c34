use std::time::Duration;

use crate::metrics::MetricsSnapshot;

/// Scale for fixed-point requests-per-second (two decimals).
const RPS_SCALE: u128 = 100;
const MICROS_PER_SEC: u128 = 1_000_000;

/// Final result of a run, derived once from the post-join snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Wall-clock time from the first worker launch to the last join.
    pub duration: Duration,
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    /// Requests per second times 100.
    pub rps_x100: u64,
    pub min_latency: Duration,
    pub avg_latency: Duration,
    pub max_latency: Duration,
}

impl RunReport {
    #[must_use]
    pub fn from_snapshot(snapshot: &MetricsSnapshot, duration: Duration) -> Self {
        let total = snapshot.total_requests;

        let rps_x100 = u128::from(total)
            .saturating_mul(RPS_SCALE.saturating_mul(MICROS_PER_SEC))
            .checked_div(duration.as_micros())
            .map_or(0, |scaled| u64::try_from(scaled).unwrap_or(u64::MAX));

        let (min_latency, avg_latency, max_latency) = if total == 0 {
            (Duration::ZERO, Duration::ZERO, Duration::ZERO)
        } else {
            let avg_ns = snapshot
                .latency_sum
                .as_nanos()
                .checked_div(u128::from(total))
                .unwrap_or(0);
            (
                snapshot.min_latency.unwrap_or(Duration::ZERO),
                Duration::from_nanos(u64::try_from(avg_ns).unwrap_or(u64::MAX)),
                snapshot.max_latency,
            )
        };

        Self {
            duration,
            total_requests: total,
            successful_requests: snapshot.successful_requests,
            failed_requests: snapshot.failed_requests,
            rps_x100,
            min_latency,
            avg_latency,
            max_latency,
        }
    }
}
