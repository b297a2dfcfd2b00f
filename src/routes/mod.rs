//! HTTP route handlers.
//!
//! Two fixed routes, each with its own Cache-Control policy. Request tracing
//! is enabled via middleware that generates a unique request ID for each
//! incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;

use axum::{http::Uri, middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HEALTH, CACHE_CONTROL_HOME, HEALTH_PATH, HOME_PATH};
use crate::error::AppError;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Fallback for every path without a route.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Landing page - fixed content, moderate cache
    let home_routes = Router::new()
        .route(HOME_PATH, get(home::index))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOME),
        ));

    // Health check - never cached, always fresh for liveness probes
    let health_routes = Router::new()
        .route(HEALTH_PATH, get(health::health))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    Router::new()
        .merge(home_routes)
        .merge(health_routes)
        .fallback(not_found)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
