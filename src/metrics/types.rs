use std::time::Duration;

use crate::error::TransportError;

#[derive(Debug)]
pub enum AttemptResult {
    /// A response arrived with this status code.
    Status(u16),
    /// No complete response was received.
    Failed(TransportError),
}

/// Result of one attempt. Folded into the accumulator and then dropped.
#[derive(Debug)]
pub struct RequestOutcome {
    pub elapsed: Duration,
    pub result: AttemptResult,
}

impl RequestOutcome {
    #[must_use]
    pub const fn new(elapsed: Duration, result: AttemptResult) -> Self {
        Self { elapsed, result }
    }

    #[must_use]
    pub const fn status(elapsed: Duration, status_code: u16) -> Self {
        Self::new(elapsed, AttemptResult::Status(status_code))
    }

    #[must_use]
    pub const fn failed(elapsed: Duration, error: TransportError) -> Self {
        Self::new(elapsed, AttemptResult::Failed(error))
    }

    /// Only 200 and 201 count as success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.result, AttemptResult::Status(200 | 201))
    }
}

/// Point-in-time copy of the accumulator totals.
///
/// Taken before every worker has joined, the fields may not agree with each
/// other; after join they are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub latency_sum: Duration,
    /// `None` until the first outcome is recorded.
    pub min_latency: Option<Duration>,
    pub max_latency: Duration,
}
