//! HTTP to HTTPS redirect server.

use std::net::SocketAddr;

use axum::http::Uri;
use axum::response::Redirect;
use axum::routing::any;
use axum::Router;
use axum_extra::extract::Host;
use axum_server::Handle;

/// Spawn an HTTP server that redirects all requests to HTTPS.
///
/// Shares the main server's handle so both listeners drain together.
pub fn spawn_redirect_server(ip: std::net::IpAddr, http_port: u16, https_port: u16, handle: Handle) {
    tokio::spawn(async move {
        let addr = SocketAddr::new(ip, http_port);

        tracing::info!(%addr, https_port, "Starting HTTP->HTTPS redirect server");

        match axum_server::bind(addr)
            .handle(handle)
            .serve(redirect_router(https_port).into_make_service())
            .await
        {
            Ok(()) => tracing::debug!("HTTP redirect server stopped"),
            Err(e) => tracing::error!(error = %e, "HTTP redirect server failed"),
        }
    });
}

/// Router answering every request with a 308 to the HTTPS equivalent.
fn redirect_router(https_port: u16) -> Router {
    Router::new().fallback(any(move |Host(host): Host, uri: Uri| async move {
        Redirect::permanent(&https_url(&host, &uri, https_port))
    }))
}

/// Build the HTTPS URL for a plain-HTTP request.
fn https_url(host: &str, uri: &Uri, https_port: u16) -> String {
    let host = strip_port(host);
    let path = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    let url = if https_port == 443 {
        format!("https://{}{}", host, path)
    } else {
        format!("https://{}:{}{}", host, https_port, path)
    };
    tracing::debug!(from = %uri, to = %url, "Redirecting HTTP to HTTPS");
    url
}

/// Remove a trailing `:port`, leaving bracketed IPv6 literals intact.
fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        return match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        };
    }
    host.split(':').next().unwrap_or(host)
}
