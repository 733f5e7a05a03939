//! Command-line arguments shared by the binaries.

use std::path::PathBuf;

use clap::Args;

use crate::config::{resolve_config, AppConfig, ConfigError, ConfigOverrides};

/// Where to listen and how to behave. Flags override the config file.
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Path to a TOML config file
    #[arg(short, long, env = "APP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long, env = "APP_HOST")]
    pub host: Option<String>,

    /// Port to listen on [default: 3000]
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Environment name reported by the health endpoint [default: development]
    #[arg(short, long, env = "APP_ENV")]
    pub environment: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "APP_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory of static assets [default: public]
    #[arg(long, env = "APP_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
}

impl ServeArgs {
    /// Defaults, then the config file, then these arguments.
    pub fn resolve(self) -> Result<AppConfig, ConfigError> {
        let overrides = ConfigOverrides {
            host: self.host,
            port: self.port,
            environment: self.environment,
            log_level: self.log_level,
            static_dir: self.static_dir,
        };
        resolve_config(self.config.as_deref(), overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        serve: ServeArgs,
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from(["vibe-app", "--port", "8080", "-e", "staging"]).unwrap();
        let config = cli.serve.resolve().unwrap();
        assert_eq!(config.listener.port, 8080);
        assert_eq!(config.environment, "staging");
    }

    #[test]
    fn test_static_dir_flag() {
        let cli = Cli::try_parse_from(["vibe-app", "--static-dir", "/srv/assets"]).unwrap();
        let config = cli.serve.resolve().unwrap();
        assert_eq!(config.static_dir, PathBuf::from("/srv/assets"));
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["vibe-app", "--port", "http"]).is_err());
    }
}
