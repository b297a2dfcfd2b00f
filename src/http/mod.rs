//! HTTP server module with optional TLS.
//!
//! Two modes:
//! - **None** (default): plain HTTP, for development or behind a reverse proxy
//! - **Manual**: user-provided certificate and key files
//!
//! The server includes:
//! - HTTP to HTTPS redirect (when TLS enabled)
//! - Graceful shutdown on SIGTERM/SIGINT
//! - Certificate hot-reload via SIGHUP (manual mode)

mod redirect;
mod server;
mod shutdown;

pub use server::{start_server, ServerError};
