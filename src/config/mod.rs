//! Process configuration.
//!
//! # Data Flow
//! ```text
//! environment (PORT)
//!     → RelayConfig::from_env() at startup
//!     → immutable for the life of the process
//!     → shared via AppState with all handlers
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup and never mutated
//! - Every field has a default so an empty environment still runs
//! - An unparseable PORT falls back to the default instead of aborting

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Listening port when `PORT` is unset or invalid.
pub const DEFAULT_PORT: u16 = 3000;

/// Immutable process-wide configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Listening TCP port.
    pub port: u16,

    /// Total time allowed for one outbound request/response.
    pub upstream_timeout: Duration,

    /// Redirects followed automatically by the outbound client.
    pub max_redirects: usize,

    /// Maximum accepted inbound body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            upstream_timeout: Duration::from_secs(30),
            max_redirects: 5,
            max_body_bytes: 10 * 1024 * 1024,
        }
    }
}

impl RelayConfig {
    /// Build configuration from the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = env::var("PORT") {
            match raw.parse::<u16>() {
                Ok(port) => config.port = port,
                Err(_) => {
                    tracing::warn!(
                        value = %raw,
                        default = DEFAULT_PORT,
                        "PORT is not a valid port number, using default"
                    );
                }
            }
        }
        config
    }

    /// Address the server binds to.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
