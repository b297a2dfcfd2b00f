//! Graceful shutdown and signal handling.
//!
//! Handles:
//! - SIGTERM/SIGINT: Graceful shutdown with connection draining
//! - SIGHUP: Certificate reload (manual TLS mode only)

use std::time::Duration;

use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;

/// Setup graceful shutdown on SIGTERM and SIGINT.
///
/// When either signal is received the server stops accepting connections and
/// waits up to `grace` for in-flight requests before exiting.
pub fn setup_shutdown_handler(handle: Handle, grace: Duration) {
    tokio::spawn(async move {
        let ctrl_c = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    sigterm.recv().await;
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to install SIGTERM handler");
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C, initiating graceful shutdown");
            }
            _ = terminate => {
                tracing::info!("Received SIGTERM, initiating graceful shutdown");
            }
        }

        handle.graceful_shutdown(Some(grace));
        tracing::info!(
            grace_seconds = grace.as_secs(),
            "Graceful shutdown initiated, waiting for connections to close"
        );
    });
}

/// Setup SIGHUP handler for certificate reload (manual TLS mode).
///
/// On SIGHUP the certificate and key are re-read from disk. A failed reload
/// keeps the previous certificate in service.
#[cfg(unix)]
pub fn setup_reload_handler(tls_config: RustlsConfig, cert_path: String, key_path: String) {
    tokio::spawn(async move {
        let mut sighup =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::hangup()) {
                Ok(signal) => signal,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to install SIGHUP handler");
                    return;
                }
            };

        while sighup.recv().await.is_some() {
            tracing::info!("Received SIGHUP, reloading TLS certificates");

            match tls_config.reload_from_pem_file(&cert_path, &key_path).await {
                Ok(()) => {
                    tracing::info!(cert = %cert_path, key = %key_path, "TLS certificates reloaded");
                }
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        cert = %cert_path,
                        key = %key_path,
                        "Failed to reload TLS certificates"
                    );
                }
            }
        }
    });
}

/// No-op reload handler for non-Unix platforms.
#[cfg(not(unix))]
pub fn setup_reload_handler(_tls_config: RustlsConfig, _cert_path: String, _key_path: String) {
    tracing::warn!("Certificate hot-reload via SIGHUP not supported on this platform");
}
