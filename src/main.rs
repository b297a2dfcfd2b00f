//! TailWhale UI entry point.
//!
//! Loads configuration, initializes tracing, compiles templates, builds the
//! Axum router, and runs the HTTP(S) server until SIGINT/SIGTERM.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tailwhale_ui::config::{LogFormat, DEFAULT_LOG_FILTER};
use tailwhale_ui::http::start_server;
use tailwhale_ui::{create_router, init_templates, AppConfig, AppState};

/// TailWhale UI: landing page and liveness endpoint
#[derive(Parser, Debug)]
#[command(name = "tailwhale-ui", version, about)]
struct Args {
    /// Path to configuration file [default: config/default.toml if present]
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "tailwhale_ui=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));
    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration comes first: it decides the log format
    let config = AppConfig::resolve(args.config.as_deref())?;

    // Log filter priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, config.logging.format);

    tracing::info!(
        file = ?args.config,
        host = %config.http.host,
        port = config.http.port,
        tls = ?config.http.tls.mode,
        "Loaded configuration"
    );

    let tera = init_templates()?;
    tracing::info!("Initialized templates");

    let state = AppState::new(tera);
    let app = create_router(state);

    start_server(app, &config).await?;

    tracing::info!("Server stopped");
    Ok(())
}
