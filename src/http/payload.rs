use std::path::Path;

use bytes::Bytes;
use tracing::{debug, info};

use crate::args::{DEFAULT_PAYLOAD, TesterArgs};
use crate::error::{AppError, AppResult, ConfigError};

/// Picks the request body: inline `--data` first, then the payload file.
///
/// # Errors
///
/// Returns an error when the payload file exists but cannot be read.
pub fn resolve_payload(args: &TesterArgs) -> AppResult<Bytes> {
    if let Some(data) = args.data.as_ref() {
        debug!("Using inline request body ({} bytes)", data.len());
        return Ok(Bytes::from(data.clone()));
    }
    load_payload(Path::new(&args.payload))
}

/// Reads a payload file, falling back to `{}` when it does not exist.
///
/// # Errors
///
/// Returns an error for any I/O failure other than a missing file.
pub fn load_payload(path: &Path) -> AppResult<Bytes> {
    match std::fs::read(path) {
        Ok(bytes) => {
            debug!("Loaded payload '{}' ({} bytes)", path.display(), bytes.len());
            Ok(Bytes::from(bytes))
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!(
                "Payload '{}' not found; sending an empty JSON object.",
                path.display()
            );
            Ok(Bytes::from_static(DEFAULT_PAYLOAD))
        }
        Err(err) => Err(AppError::config(ConfigError::ReadPayload {
            path: path.to_path_buf(),
            source: err,
        })),
    }
}
