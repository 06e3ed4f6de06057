//! HTTP Forwarding Relay
//!
//! A single-endpoint relay built with Tokio and Axum: it accepts a
//! request whose target is encoded in the path, replays it against that
//! absolute URL, and returns the target's status and body verbatim.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │               FORWARDING RELAY                │
//!                    │                                               │
//!  Client Request    │  ┌─────────┐   ┌─────────┐   ┌────────────┐  │
//!  ──────────────────┼─▶│  http   │──▶│  relay  │──▶│  upstream  │──┼──▶ Target
//!                    │  │ server  │   │ target+ │   │  client    │  │    Server
//!                    │  └─────────┘   │ headers │   │ (reqwest)  │  │
//!                    │                └─────────┘   └─────┬──────┘  │
//!  Client Response   │                                    │         │
//!  ◀─────────────────┼── status + body relayed verbatim ◀─┘         │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐  │
//!                    │  │          Cross-Cutting Concerns          │  │
//!                    │  │  ┌────────┐ ┌────────┐ ┌─────────────┐  │  │
//!                    │  │  │ config │ │ health │ │ tracing+ids │  │  │
//!                    │  │  └────────┘ └────────┘ └─────────────┘  │  │
//!                    │  └─────────────────────────────────────────┘  │
//!                    └──────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use forward_relay::config::RelayConfig;
use forward_relay::http::RelayServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forward_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("forward-relay v{} starting", env!("CARGO_PKG_VERSION"));

    // Load configuration (PORT env var, defaults otherwise)
    let config = RelayConfig::from_env();

    tracing::info!(
        port = config.port,
        upstream_timeout_secs = config.upstream_timeout.as_secs(),
        max_redirects = config.max_redirects,
        max_body_bytes = config.max_body_bytes,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(config.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = RelayServer::new(config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
