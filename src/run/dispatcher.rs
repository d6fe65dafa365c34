use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::error::{AppError, AppResult};
use crate::http::TransportFactory;
use crate::metrics::{MetricsAccumulator, Stopwatch};

use super::config::{RunConfig, RunPlan};
use super::progress::spawn_progress_reporter;
use super::report::RunReport;
use super::worker::Worker;

/// Coordinates one run: validate, launch every worker, join them all, report.
#[derive(Debug)]
pub struct Dispatcher<F> {
    factory: F,
}

impl<F> Dispatcher<F>
where
    F: TransportFactory,
{
    #[must_use]
    pub const fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Executes `workers x requests_per_worker` attempts and returns the report.
    ///
    /// Request-level failures are absorbed into the report; only invalid
    /// settings, transport construction, or a panicked worker fail the run.
    ///
    /// # Errors
    ///
    /// Returns a configuration error before any worker starts when the
    /// settings are invalid, an HTTP error when a worker transport cannot be
    /// built, or a join error when a worker task panics.
    pub async fn run(&self, config: &RunConfig) -> AppResult<RunReport> {
        let plan = Arc::new(RunPlan::validate(config)?);
        let worker_count = plan.workers.get();

        let mut transports = Vec::with_capacity(worker_count);
        for worker_id in 1..=worker_count {
            transports.push(self.factory.build(worker_id)?);
        }

        info!("Starting load test...");
        info!(
            "Workers: {}, Requests/Worker: {}, Total: {}",
            worker_count,
            plan.requests_per_worker.get(),
            plan.total_requests()
        );
        info!("Target URL: {}", plan.request.url);
        if plan.auth_enabled {
            info!("Auth Token: Set (hidden)");
        } else {
            info!("Auth Token: Not set");
        }

        let accumulator = Arc::new(MetricsAccumulator::new());
        let (done_tx, done_rx) = watch::channel(false);
        let progress_handle = plan.progress_interval.map(|every| {
            spawn_progress_reporter(
                Arc::clone(&accumulator),
                every,
                plan.total_requests(),
                done_rx,
            )
        });

        let run_clock = Stopwatch::start();
        let mut handles = Vec::with_capacity(worker_count);
        for (worker_id, transport) in (1..=worker_count).zip(transports) {
            let worker = Worker::new(
                worker_id,
                Arc::clone(&plan),
                transport,
                Arc::clone(&accumulator),
            );
            handles.push(tokio::spawn(worker.run()));
        }

        let mut first_failure = None;
        for handle in handles {
            match handle.await {
                Ok(stats) => debug!(
                    "Worker {} finished: {}/{} successful",
                    stats.worker_id, stats.successes, stats.attempts
                ),
                Err(err) => {
                    error!("Worker task failed: {}", err);
                    if first_failure.is_none() {
                        first_failure = Some(err);
                    }
                }
            }
        }
        let duration = run_clock.elapsed();

        drop(done_tx.send(true));
        if let Some(handle) = progress_handle
            && let Err(err) = handle.await
        {
            error!("Progress reporter failed: {}", err);
        }

        if let Some(err) = first_failure {
            return Err(AppError::from(err));
        }

        let snapshot = accumulator.snapshot();
        Ok(RunReport::from_snapshot(&snapshot, duration))
    }
}
