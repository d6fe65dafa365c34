use std::time::Duration;

use bytes::Bytes;
use reqwest::Url;

use crate::args::{PositiveUsize, TesterArgs};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};
use crate::http::OutboundRequest;

/// Settings for one run as supplied by the caller. Validated by
/// [`RunPlan::validate`] before any worker starts.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub workers: usize,
    pub requests_per_worker: usize,
    pub target_url: String,
    pub auth_token: String,
    pub body: Bytes,
    pub request_timeout: Option<Duration>,
    pub progress_interval: Option<Duration>,
}

impl RunConfig {
    #[must_use]
    pub fn from_args(args: &TesterArgs, body: Bytes) -> Self {
        Self {
            workers: args.workers.get(),
            requests_per_worker: args.requests.get(),
            target_url: args.url.clone(),
            auth_token: args.auth_token.clone(),
            body,
            request_timeout: args.request_timeout,
            progress_interval: args.progress_interval,
        }
    }
}

/// Validated, read-only view of a [`RunConfig`] shared by all workers.
#[derive(Debug)]
pub struct RunPlan {
    pub workers: PositiveUsize,
    pub requests_per_worker: PositiveUsize,
    pub request: OutboundRequest,
    pub request_timeout: Option<Duration>,
    pub progress_interval: Option<Duration>,
    pub(crate) auth_enabled: bool,
}

impl RunPlan {
    /// # Errors
    ///
    /// Returns a configuration error for non-positive counts, a missing or
    /// malformed target URL, a zero timeout/interval, or an unusable token.
    pub fn validate(config: &RunConfig) -> AppResult<Self> {
        let workers = ensure_positive(config.workers, "workers")?;
        let requests_per_worker = ensure_positive(config.requests_per_worker, "requests")?;
        let target = parse_target(&config.target_url)?;
        let request_timeout = ensure_non_zero(config.request_timeout, "timeout")?;
        let progress_interval = ensure_non_zero(config.progress_interval, "progress_interval")?;
        let request =
            OutboundRequest::json_post(target, config.body.clone(), &config.auth_token)?;

        Ok(Self {
            workers,
            requests_per_worker,
            request,
            request_timeout,
            progress_interval,
            auth_enabled: !config.auth_token.is_empty(),
        })
    }

    #[must_use]
    pub fn total_requests(&self) -> u64 {
        let workers = u64::try_from(self.workers.get()).unwrap_or(u64::MAX);
        let per_worker = u64::try_from(self.requests_per_worker.get()).unwrap_or(u64::MAX);
        workers.saturating_mul(per_worker)
    }
}

/// Accepts absolute http(s) URLs with a host.
///
/// # Errors
///
/// Returns an error when the URL is empty, unparsable, hostless, or not http(s).
pub fn parse_target(raw: &str) -> Result<Url, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingUrl);
    }
    let url = Url::parse(trimmed).map_err(|err| ValidationError::InvalidUrl {
        url: trimmed.to_owned(),
        source: err,
    })?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ValidationError::UnsupportedScheme {
                scheme: other.to_owned(),
            });
        }
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::UrlMissingHost);
    }
    Ok(url)
}

fn ensure_positive(value: usize, field: &str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}

fn ensure_non_zero(value: Option<Duration>, field: &str) -> AppResult<Option<Duration>> {
    match value {
        Some(duration) if duration.is_zero() => {
            Err(AppError::config(ConfigError::InvalidDuration {
                field: field.to_owned(),
                source: ValidationError::DurationZero,
            }))
        }
        other => Ok(other),
    }
}
