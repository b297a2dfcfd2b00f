//! HTTP/HTTPS server startup logic.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;

use crate::config::{AppConfig, TlsConfig, TlsMode};

use super::redirect;
use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    #[error("Failed to load TLS configuration: {0}")]
    TlsConfig(String),

    #[error("Invalid listen address: {0}")]
    Address(#[from] std::net::AddrParseError),
}

/// Start the HTTP/HTTPS server based on configuration.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr: SocketAddr = config.http.bind_address().parse()?;
    let grace = Duration::from_secs(config.http.shutdown_grace_seconds);
    let handle = Handle::new();

    match config.http.tls.mode {
        TlsMode::None => {
            tracing::warn!(
                "TLS disabled - server running on plain HTTP (not recommended for production)"
            );
            start_plain_server(app, addr, handle, grace).await
        }
        TlsMode::Manual => start_manual_tls_server(app, addr, &config.http.tls, handle, grace).await,
    }
}

/// Start a plain HTTP server (no TLS).
async fn start_plain_server(
    app: Router,
    addr: SocketAddr,
    handle: Handle,
    grace: Duration,
) -> Result<(), ServerError> {
    tracing::info!(%addr, "Starting HTTP server (no TLS)");

    shutdown::setup_shutdown_handler(handle.clone(), grace);

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

/// Start HTTPS server with user-provided certificates.
async fn start_manual_tls_server(
    app: Router,
    addr: SocketAddr,
    tls_config: &TlsConfig,
    handle: Handle,
    grace: Duration,
) -> Result<(), ServerError> {
    let (cert_path, key_path) = match (&tls_config.cert_path, &tls_config.key_path) {
        (Some(cert), Some(key)) => (cert.clone(), key.clone()),
        _ => {
            return Err(ServerError::TlsConfig(
                "manual TLS requires cert_path and key_path".to_string(),
            ))
        }
    };

    tracing::info!(%addr, cert = %cert_path, key = %key_path, "Starting HTTPS server (manual certs)");

    let rustls_config = RustlsConfig::from_pem_file(&cert_path, &key_path)
        .await
        .map_err(|e| ServerError::TlsConfig(format!("Failed to load certificates: {}", e)))?;

    shutdown::setup_shutdown_handler(handle.clone(), grace);
    shutdown::setup_reload_handler(rustls_config.clone(), cert_path, key_path);

    if tls_config.redirect_http {
        redirect::spawn_redirect_server(
            addr.ip(),
            tls_config.redirect_port,
            addr.port(),
            handle.clone(),
        );
    }

    axum_server::bind_rustls(addr, rustls_config)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
