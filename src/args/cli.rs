use clap::Parser;
use std::time::Duration;

use super::defaults::{
    DEFAULT_PAYLOAD_PATH, DEFAULT_REQUESTS_PER_WORKER, DEFAULT_TARGET_URL, DEFAULT_WORKERS,
};
use super::parsers::{parse_duration_arg, parse_positive_usize};
use super::types::{OutputFormat, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent HTTP load generator - runs a fixed pool of workers, each sending a fixed number of POST requests, and reports throughput and latency."
)]
pub struct TesterArgs {
    /// Number of concurrent workers
    #[arg(
        long = "workers",
        short = 'w',
        visible_alias = "threads",
        env = "NUM_THREADS",
        default_value = DEFAULT_WORKERS,
        value_parser = parse_positive_usize
    )]
    pub workers: PositiveUsize,

    /// Sequential requests sent by each worker
    #[arg(
        long = "requests",
        short = 'n',
        env = "REQUESTS_PER_THREAD",
        default_value = DEFAULT_REQUESTS_PER_WORKER,
        value_parser = parse_positive_usize
    )]
    pub requests: PositiveUsize,

    /// Target URL for the load test
    #[arg(long, short, env = "TARGET_URL", default_value = DEFAULT_TARGET_URL)]
    pub url: String,

    /// Bearer token sent as 'Authorization: Bearer <token>' when non-empty
    #[arg(
        long = "auth-token",
        env = "AUTH_TOKEN",
        default_value = "",
        hide_env_values = true,
        hide_default_value = true
    )]
    pub auth_token: String,

    /// Request body file (falls back to '{}' when missing)
    #[arg(long, short, env = "PAYLOAD_FILE", default_value = DEFAULT_PAYLOAD_PATH)]
    pub payload: String,

    /// Inline request body (overrides --payload)
    #[arg(long, short)]
    pub data: Option<String>,

    /// Per-request timeout; a timed-out attempt counts as a failure (supports ms/s/m/h)
    #[arg(long = "timeout", env = "REQUEST_TIMEOUT", value_parser = parse_duration_arg)]
    pub request_timeout: Option<Duration>,

    /// TCP connect timeout (supports ms/s/m/h)
    #[arg(long = "connect-timeout", value_parser = parse_duration_arg)]
    pub connect_timeout: Option<Duration>,

    /// Accept invalid TLS certificates and hostnames
    #[arg(long = "insecure", short = 'k')]
    pub insecure: bool,

    /// Open a fresh connection for every request
    #[arg(long = "disable-keepalive")]
    pub disable_keepalive: bool,

    /// Log an approximate progress snapshot at this interval (supports ms/s/m/h)
    #[arg(long = "progress-interval", value_parser = parse_duration_arg)]
    pub progress_interval: Option<Duration>,

    /// Report format
    #[arg(long = "output-format", default_value = "text", ignore_case = true)]
    pub output_format: OutputFormat,

    /// Path to a TOML or JSON config file (defaults to volley.toml/volley.json when present)
    #[arg(long, short)]
    pub config: Option<String>,

    /// Do not load a .env file from the working directory
    #[arg(long = "no-dotenv")]
    pub no_dotenv: bool,

    /// Enable verbose (debug) logging, including one line per request
    #[arg(long, short)]
    pub verbose: bool,
}
