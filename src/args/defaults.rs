pub(crate) const DEFAULT_USER_AGENT: &str = concat!("volley-loadtest/", env!("CARGO_PKG_VERSION"));

pub(crate) const DEFAULT_TARGET_URL: &str = "http://localhost:3000/api/foo";
pub(crate) const DEFAULT_WORKERS: &str = "20";
pub(crate) const DEFAULT_REQUESTS_PER_WORKER: &str = "50";
pub(crate) const DEFAULT_PAYLOAD_PATH: &str = "payload.json";

/// Body sent when no payload file is found.
pub(crate) const DEFAULT_PAYLOAD: &[u8] = b"{}";

/// Config filenames checked when `--config` is not given.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["volley.toml", "volley.json"];
