use thiserror::Error;

/// Failure of a single attempt before a complete response was received.
///
/// Every variant is counted the same way: one failed attempt whose elapsed
/// time still feeds the latency statistics.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("connection failed: {source}")]
    Connect {
        #[source]
        source: reqwest::Error,
    },
    #[error("request failed: {source}")]
    Request {
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to read response body: {source}")]
    Body {
        #[source]
        source: reqwest::Error,
    },
}

impl TransportError {
    #[must_use]
    pub fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connect { source: err }
        } else {
            TransportError::Request { source: err }
        }
    }

    #[must_use]
    pub fn from_body(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::Body { source: err }
        }
    }
}
