//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (tracing, CORS, request ID)
//! - Bind the server to a listener and serve until shutdown
//!
//! # Design Decisions
//! - CORS is wide open on every route: the relay exists to be called
//!   cross-origin
//! - The relay handler is registered under three routes so the bare
//!   mount point, the trailing slash, and a real target all reach it

use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::Router;
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::health;
use crate::http::request::request_id_middleware;
use crate::relay::{self, RelayError, Upstream};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: RelayConfig,
    pub upstream: Upstream,
    pub started_at: Instant,
}

/// HTTP server for the forwarding relay.
pub struct RelayServer {
    router: Router,
    config: RelayConfig,
}

impl RelayServer {
    /// Create a new server with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self, reqwest::Error> {
        let upstream = Upstream::new(&config)?;
        let state = AppState {
            config: config.clone(),
            upstream,
            started_at: Instant::now(),
        };
        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/", get(health::usage))
            .route("/health", get(health::health))
            .route("/request", any(relay::relay_handler))
            .route("/request/", any(relay::relay_handler))
            .route("/request/{*target}", any(relay::relay_handler))
            .with_state(state)
            .layer(axum::middleware::from_fn(request_id_middleware))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(handle_panic))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream_timeout_secs = self.config.upstream_timeout.as_secs(),
            max_redirects = self.config.max_redirects,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Last line of defense: anything escaping the relay pipeline becomes
/// a generic 500 with the detail logged, never leaked to the caller.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| err.downcast_ref::<String>().map(|s| s.as_str()))
        .unwrap_or("unknown panic");
    tracing::error!(detail = %detail, "Relay pipeline panicked");
    RelayError::Internal.into_response()
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
