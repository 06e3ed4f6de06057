//! HTTP Forwarding Relay Library

pub mod config;
pub mod health;
pub mod http;
pub mod relay;

pub use config::RelayConfig;
pub use http::RelayServer;
pub use relay::RelayError;
