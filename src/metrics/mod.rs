//! Request timing and concurrent metrics aggregation.
mod accumulator;
mod clock;
mod types;


pub use accumulator::MetricsAccumulator;
pub use clock::Stopwatch;
pub use types::{AttemptResult, MetricsSnapshot, RequestOutcome};
