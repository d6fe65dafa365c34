use std::time::Duration;

use serde::Deserialize;

use crate::args::{OutputFormat, parse_duration};
use crate::error::ValidationError;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(alias = "threads", alias = "num_threads")]
    pub workers: Option<usize>,
    #[serde(alias = "requests_per_thread", alias = "requests_per_worker")]
    pub requests: Option<usize>,
    #[serde(alias = "target_url")]
    pub url: Option<String>,
    pub auth_token: Option<String>,
    pub payload: Option<String>,
    pub data: Option<String>,
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub insecure: Option<bool>,
    pub disable_keepalive: Option<bool>,
    pub progress_interval: Option<DurationValue>,
    pub output_format: Option<OutputFormat>,
    pub verbose: Option<bool>,
}

/// Either whole seconds or a string such as `"500ms"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration(text),
        }
    }
}
