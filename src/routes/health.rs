//! Liveness endpoint for container orchestration.
//!
//! Answers `GET /api/health` with `{"status":"ok"}` whenever the process can
//! serve HTTP. Nothing else is checked.

use axum::Json;
use serde::Serialize;

/// Service status reported to probes. `Ok` is the only state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HealthStatus::Ok,
    })
}
