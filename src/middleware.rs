//! Request ID middleware for correlating logs with requests.
//!
//! Generates a UUID v4 for each incoming request and creates a tracing span
//! that wraps the entire request lifecycle. The same ID is returned to the
//! client in the `x-request-id` header.

use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::config::{HEALTH_PATH, REQUEST_ID_HEADER};

/// Request ID, available to handlers through request extensions.
#[derive(Clone, Copy, Debug)]
pub struct RequestId(pub Uuid);

/// Middleware that generates a request ID and creates a request span.
///
/// This should be the outermost middleware layer so the span wraps
/// all request processing, including other middleware and handlers.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let is_probe = path == HEALTH_PATH;

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();
    request.extensions_mut().insert(RequestId(request_id));

    async move {
        let mut response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;
        let status = response.status().as_u16();

        tracing::Span::current().record("duration_ms", duration_ms);
        // Probes arrive every few seconds; keep them out of info-level logs
        if is_probe {
            tracing::debug!(status, duration_ms, "Request completed");
        } else {
            tracing::info!(status, duration_ms, "Request completed");
        }

        // A hyphenated UUID is always a valid header value
        if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
            response
                .headers_mut()
                .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
        }

        response
    }
    .instrument(span)
    .await
}
