//! Structured logging.
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - JSON format in production, human-readable format elsewhere
//! - `RUST_LOG` wins over the configured level

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

use crate::config::AppConfig;

/// Default filter directive for a log level.
pub fn default_directive(level: &str) -> String {
    let level = level.to_ascii_lowercase();
    format!("vibe_app={level},tower_http={level}")
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &AppConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.observability.log_level)));

    let json = config.is_production();

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json()))
        .with((!json).then(|| fmt::layer()))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive("DEBUG"), "vibe_app=debug,tower_http=debug");
    }
}
