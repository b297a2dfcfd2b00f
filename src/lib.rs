//! TailWhale UI: the TailWhale landing page and liveness endpoint.
//!
//! The binary in `main.rs` wires these modules together; integration tests
//! drive [`create_router`] directly.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod templates;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
pub use templates::init_templates;
