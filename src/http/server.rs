//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router around the dispatcher
//! - Wire up middleware (tracing, request ID, metrics, headers, CORS)
//! - Bind server to listener
//! - Shut down gracefully on broadcast
//!
//! # Layer order (outermost first)
//! ```text
//! SetRequestId → Trace → PropagateRequestId → metrics
//!     → security headers → CORS → dispatch
//! ```
//!
//! The body cap and read timeout are enforced inside the dispatcher, so
//! they fail through the same 500 policy as any handler.

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::AppConfig;
use crate::http::dispatch::dispatch;
use crate::http::request::{request_span, UuidRequestId};
use crate::observability::metrics::track_requests;
use crate::payloads::clock::{Clock, SystemClock};
use crate::payloads::random::{EntropyRandom, RandomSource};
use crate::payloads::system::RuntimeInfo;
use crate::routing::RouteTable;
use crate::security::headers::security_headers;
use crate::sites::Site;
use crate::views::Renderer;

/// Application state injected into the dispatcher. Everything is read-only.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
    pub renderer: Arc<dyn Renderer>,
    pub clock: Arc<dyn Clock>,
    pub random: Arc<dyn RandomSource>,
    pub runtime: Arc<RuntimeInfo>,
    pub static_files: ServeDir,
    pub max_body_size: usize,
    pub body_timeout: Duration,
}

/// HTTP server for one site.
pub struct AppServer {
    router: Router,
    config: AppConfig,
    site_name: &'static str,
}

impl AppServer {
    /// Create a server using the system clock and OS entropy.
    pub fn new(config: AppConfig, site: Site) -> Self {
        Self::with_sources(config, site, Arc::new(SystemClock), Arc::new(EntropyRandom))
    }

    /// Create a server with explicit time and randomness sources.
    pub fn with_sources(
        config: AppConfig,
        site: Site,
        clock: Arc<dyn Clock>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        let runtime = RuntimeInfo::new(config.environment.clone(), clock.now());

        let state = AppState {
            table: Arc::new(site.table),
            renderer: site.renderer,
            clock,
            random,
            runtime: Arc::new(runtime),
            static_files: ServeDir::new(&config.static_dir),
            max_body_size: config.security.max_body_size,
            body_timeout: Duration::from_secs(config.timeouts.request_secs),
        };

        tracing::debug!(
            site = site.name,
            routes = state.table.len(),
            static_dir = %config.static_dir.display(),
            "Route table loaded"
        );

        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            site_name: site.name,
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/", any(dispatch))
            .route("/{*path}", any(dispatch))
            .with_state(state);

        if config.security.enable_cors {
            router = router.layer(CorsLayer::permissive());
        }
        if config.security.enable_headers {
            router = router.layer(middleware::from_fn(security_headers));
        }

        router
            .layer(middleware::from_fn(track_requests))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(request_span)
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// The fully layered router, for driving the server in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            site = self.site_name,
            address = %addr,
            environment = %self.config.environment,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
