//! Core library for the `volley` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, configuration loading, the HTTP transport, the lock-free metrics
//! accumulator, and the dispatcher that runs a fixed pool of workers and
//! turns their outcomes into a [`run::RunReport`].
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
pub mod run;
