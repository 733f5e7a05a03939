//! Startup orchestration.
//!
//! # Responsibilities
//! - Initialize logging and (optionally) metrics
//! - Bind the listener
//! - Turn OS signals into a `Shutdown` trigger
//! - Serve the site until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::http::AppServer;
use crate::lifecycle::signals::wait_for_signal;
use crate::lifecycle::Shutdown;
use crate::observability::{logging, metrics};
use crate::sites::Site;

/// Run `site` with `config` until the process is signalled.
pub async fn serve(config: AppConfig, site: Site) -> Result<(), AppError> {
    logging::init_logging(&config).map_err(|e| AppError::Logging(e.to_string()))?;

    tracing::info!(
        site = site.name,
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        "Starting"
    );

    if config.observability.metrics_enabled {
        let addr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| AppError::Metrics(format!(
                "invalid metrics address `{}`",
                config.observability.metrics_address
            )))?;
        metrics::init_metrics(addr).map_err(|e| AppError::Metrics(e.to_string()))?;
    }

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.security.max_body_size,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(config.listener.bind_address()).await?;

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    let server = AppServer::new(config, site);
    server.run(listener, receiver).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
