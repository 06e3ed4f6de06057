//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routing, CORS, tracing)
//!     → request.rs (attach request ID)
//!     → relay handler / health handlers
//!     → response sent to client
//! ```

pub mod request;
pub mod server;

pub use request::{request_id_middleware, X_REQUEST_ID};
pub use server::{AppState, RelayServer};
