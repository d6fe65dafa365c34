//! Run orchestration: validated settings, the worker loop, and the dispatcher
//! that joins every worker before reporting.
mod config;
mod dispatcher;
mod progress;
mod report;
mod worker;


pub use config::{RunConfig, RunPlan};
pub use dispatcher::Dispatcher;
pub use report::RunReport;
pub use worker::WorkerStats;
