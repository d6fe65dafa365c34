use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client for worker {worker_id}: {source}")]
    BuildClientFailed {
        worker_id: usize,
        #[source]
        source: reqwest::Error,
    },
}
