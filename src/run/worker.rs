use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::TransportError;
use crate::http::Transport;
use crate::metrics::{AttemptResult, MetricsAccumulator, RequestOutcome, Stopwatch};

use super::config::RunPlan;

/// Per-worker tallies returned when a worker finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerStats {
    pub worker_id: usize,
    pub attempts: u64,
    pub successes: u64,
}

pub(super) struct Worker<T> {
    id: usize,
    plan: Arc<RunPlan>,
    transport: T,
    accumulator: Arc<MetricsAccumulator>,
}

impl<T> Worker<T>
where
    T: Transport,
{
    pub(super) const fn new(
        id: usize,
        plan: Arc<RunPlan>,
        transport: T,
        accumulator: Arc<MetricsAccumulator>,
    ) -> Self {
        Self {
            id,
            plan,
            transport,
            accumulator,
        }
    }

    /// Runs every configured attempt in order, one in flight at a time.
    /// Failed attempts are recorded and the loop continues; nothing is retried.
    pub(super) async fn run(self) -> WorkerStats {
        let total = self.plan.requests_per_worker.get();
        let mut stats = WorkerStats {
            worker_id: self.id,
            attempts: 0,
            successes: 0,
        };

        for attempt in 1..=total {
            let stopwatch = Stopwatch::start();
            let result = self.send_once().await;
            let outcome = RequestOutcome::new(stopwatch.elapsed(), result);

            self.log_attempt(attempt, total, &outcome);
            self.accumulator.record(&outcome);

            stats.attempts = stats.attempts.saturating_add(1);
            if outcome.is_success() {
                stats.successes = stats.successes.saturating_add(1);
            }
        }

        stats
    }

    async fn send_once(&self) -> AttemptResult {
        let request = &self.plan.request;
        let sent = match self.plan.request_timeout {
            Some(limit) => tokio::time::timeout(limit, self.transport.send(request))
                .await
                .unwrap_or(Err(TransportError::Timeout)),
            None => self.transport.send(request).await,
        };
        match sent {
            Ok(status) => AttemptResult::Status(status),
            Err(err) => AttemptResult::Failed(err),
        }
    }

    fn log_attempt(&self, attempt: usize, total: usize, outcome: &RequestOutcome) {
        let latency_us = u64::try_from(outcome.elapsed.as_micros()).unwrap_or(u64::MAX);
        match &outcome.result {
            AttemptResult::Status(status) => debug!(
                worker = self.id,
                latency_us,
                "Worker {:>2} | Request {:>3}/{} | Status: {}",
                self.id,
                attempt,
                total,
                status
            ),
            AttemptResult::Failed(err) => warn!(
                worker = self.id,
                latency_us,
                "Worker {:>2} | Request {:>3}/{} | Error: {}",
                self.id,
                attempt,
                total,
                err
            ),
        }
    }
}
