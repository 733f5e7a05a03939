//! Configuration loading from disk and start-up overrides.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Values supplied on the command line or through the environment.
///
/// These win over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub environment: Option<String>,
    pub log_level: Option<String>,
    pub static_dir: Option<PathBuf>,
}

impl ConfigOverrides {
    fn apply(self, config: &mut AppConfig) {
        if let Some(host) = self.host {
            config.listener.host = host;
        }
        if let Some(port) = self.port {
            config.listener.port = port;
        }
        if let Some(environment) = self.environment {
            config.environment = environment;
        }
        if let Some(level) = self.log_level {
            config.observability.log_level = level;
        }
        if let Some(dir) = self.static_dir {
            config.static_dir = dir;
        }
    }
}

/// Parse configuration from TOML text without validating it.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Build the process configuration: defaults, then the optional file,
/// then overrides. The result is validated once, after all layers.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => parse_config(&fs::read_to_string(path)?)?,
        None => AppConfig::default(),
    };

    overrides.apply(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
