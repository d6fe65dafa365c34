mod app;
mod config;
mod http;
mod transport;
mod validation;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use http::HttpError;
pub use transport::TransportError;
pub use validation::ValidationError;
