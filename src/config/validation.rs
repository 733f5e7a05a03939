//! Configuration validation.
//!
//! Serde handles syntax; this module checks value ranges and combinations.
//! Every problem is reported, not just the first one.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in an otherwise well-formed config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("environment must not be empty")]
    EmptyEnvironment,

    #[error("listener.host must not be empty")]
    EmptyHost,

    #[error("static_dir must not be empty")]
    EmptyStaticDir,

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("security.max_body_size must be greater than zero")]
    ZeroBodyLimit,

    #[error("observability.log_level `{0}` is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),

    #[error("observability.metrics_address `{0}` is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.environment.trim().is_empty() {
        errors.push(ValidationError::EmptyEnvironment);
    }
    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }
    if config.static_dir.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyStaticDir);
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
