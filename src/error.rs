//! Top-level error type for the binaries.

use thiserror::Error;

use crate::config::ConfigError;
use crate::routing::RouteError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("route table error: {0}")]
    Route(#[from] RouteError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("metrics setup failed: {0}")]
    Metrics(String),
}
