//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines constants for
//! HTTP cache headers, logging, and default paths. `AppConfig` is the root
//! configuration struct. Every section has defaults, so an empty file (or no
//! file at all) yields a working plain-HTTP server on localhost.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Values are in seconds. The landing page is fixed content, so upstream caches
// may hold it briefly; the liveness endpoint must never be served from cache.

/// Landing page
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 60;
pub const HTTP_CACHE_HOME_SWR: u32 = 30;

/// Error responses - short TTL so a recovering instance is picked up quickly
pub const HTTP_CACHE_ERROR_MAX_AGE: u32 = 5;

/// Stale-if-error duration (5 minutes)
pub const HTTP_CACHE_STALE_IF_ERROR: u32 = 300;

pub const CACHE_CONTROL_HOME: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}, stale-if-error={}",
    HTTP_CACHE_HOME_MAX_AGE,
    HTTP_CACHE_HOME_SWR,
    HTTP_CACHE_STALE_IF_ERROR
);

pub const CACHE_CONTROL_ERROR: &str = formatcp!("public, max-age={}", HTTP_CACHE_ERROR_MAX_AGE);

/// Liveness answers are always computed fresh
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Routes
// =============================================================================

/// Liveness probe path
pub const HEALTH_PATH: &str = "/api/health";

/// Landing page path
pub const HOME_PATH: &str = "/";

/// Response header carrying the per-request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Configuration file tried when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when neither `--log-level` nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "tailwhale_ui=debug";

pub const DEFAULT_HTTP_HOST: &str = "127.0.0.1";
pub const DEFAULT_HTTP_PORT: u16 = 3000;

/// Seconds to wait for in-flight requests after SIGINT/SIGTERM
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 30;

/// Port for the plain-HTTP redirect listener
pub const DEFAULT_REDIRECT_PORT: u16 = 80;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    #[serde(default = "HttpServerConfig::default_shutdown_grace")]
    pub shutdown_grace_seconds: u64,
    #[serde(default)]
    pub tls: TlsConfig,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_grace_seconds: Self::default_shutdown_grace(),
            tls: TlsConfig::default(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    fn default_shutdown_grace() -> u64 {
        DEFAULT_SHUTDOWN_GRACE_SECS
    }

    /// `host:port` string suitable for `SocketAddr` parsing
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            // Bare IPv6 literal
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

/// How the listener terminates TLS
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TlsMode {
    /// Plain HTTP, for development or behind a TLS-terminating proxy
    #[default]
    None,
    /// Certificate and key loaded from PEM files
    Manual,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TlsConfig {
    #[serde(default)]
    pub mode: TlsMode,
    pub cert_path: Option<String>,
    pub key_path: Option<String>,
    /// Spawn a plain-HTTP listener that redirects to HTTPS
    #[serde(default)]
    pub redirect_http: bool,
    #[serde(default = "TlsConfig::default_redirect_port")]
    pub redirect_port: u16,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            mode: TlsMode::default(),
            cert_path: None,
            key_path: None,
            redirect_http: false,
            redirect_port: Self::default_redirect_port(),
        }
    }
}

impl TlsConfig {
    fn default_redirect_port() -> u16 {
        DEFAULT_REDIRECT_PORT
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

impl AppConfig {
    /// Read and validate a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Resolve the configuration to use at startup.
    ///
    /// An explicit path must exist. Without one, `DEFAULT_CONFIG_PATH` is used
    /// if present, otherwise built-in defaults apply.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, ConfigError> {
        Self::resolve_with(explicit, DEFAULT_CONFIG_PATH)
    }

    /// Like [`AppConfig::resolve`], with the fallback path supplied by the caller.
    pub fn resolve_with<P: AsRef<Path>>(
        explicit: Option<&str>,
        default_path: P,
    ) -> Result<Self, ConfigError> {
        let default_path = default_path.as_ref();
        match explicit {
            Some(path) => Self::load(path),
            None if default_path.exists() => Self::load(default_path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation(
                "http.port must be non-zero".to_string(),
            ));
        }

        let tls = &self.http.tls;
        if tls.mode == TlsMode::Manual && (tls.cert_path.is_none() || tls.key_path.is_none()) {
            return Err(ConfigError::Validation(
                "http.tls.mode = \"manual\" requires both cert_path and key_path".to_string(),
            ));
        }

        if tls.redirect_http && tls.mode == TlsMode::None {
            return Err(ConfigError::Validation(
                "http.tls.redirect_http requires TLS to be enabled".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
        assert_eq!(config.http.shutdown_grace_seconds, DEFAULT_SHUTDOWN_GRACE_SECS);
        assert_eq!(config.http.tls.mode, TlsMode::None);
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_full_config_parses() {
        let config = AppConfig::from_toml(
            r#"
            [http]
            host = "0.0.0.0"
            port = 8443
            shutdown_grace_seconds = 5

            [http.tls]
            mode = "manual"
            cert_path = "/etc/tailwhale/cert.pem"
            key_path = "/etc/tailwhale/key.pem"
            redirect_http = true
            redirect_port = 8080

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.http.bind_address(), "0.0.0.0:8443");
        assert_eq!(config.http.shutdown_grace_seconds, 5);
        assert_eq!(config.http.tls.mode, TlsMode::Manual);
        assert_eq!(config.http.tls.redirect_port, 8080);
        assert!(config.http.tls.redirect_http);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_manual_tls_requires_paths() {
        let err = AppConfig::from_toml(
            r#"
            [http.tls]
            mode = "manual"
            cert_path = "/etc/tailwhale/cert.pem"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_redirect_without_tls_rejected() {
        let err = AppConfig::from_toml("[http.tls]\nredirect_http = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_zero_port_rejected() {
        let err = AppConfig::from_toml("[http]\nport = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let err = AppConfig::from_toml("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = AppConfig::from_toml("[http]\nhots = \"0.0.0.0\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_ipv6_bind_address() {
        let http = HttpServerConfig {
            host: "::1".to_string(),
            ..HttpServerConfig::default()
        };
        assert_eq!(http.bind_address(), "[::1]:3000");
        assert!(http.bind_address().parse::<std::net::SocketAddr>().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http]\nport = 4000").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.port, 4000);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let err = AppConfig::resolve(missing.to_str()).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_default_log_filter_targets_this_crate() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
        for directive in DEFAULT_LOG_FILTER.split(',') {
            assert!(directive.starts_with("tailwhale_ui"), "unexpected directive {directive}");
        }
    }

    #[test]
    fn test_default_file_used_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join("default.toml");
        std::fs::write(&default_path, "[http]\nport = 4100\n").unwrap();

        let config = AppConfig::resolve_with(None, &default_path).unwrap();
        assert_eq!(config.http.port, 4100);
    }

    #[test]
    fn test_builtin_defaults_when_default_file_absent() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join("default.toml");

        let config = AppConfig::resolve_with(None, &default_path).unwrap();
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
        assert_eq!(config.http.tls.mode, TlsMode::None);
    }

    #[test]
    fn test_explicit_path_wins_over_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join("default.toml");
        let explicit_path = dir.path().join("explicit.toml");
        std::fs::write(&default_path, "[http]\nport = 4100\n").unwrap();
        std::fs::write(&explicit_path, "[http]\nport = 4200\n").unwrap();

        let config = AppConfig::resolve_with(explicit_path.to_str(), &default_path).unwrap();
        assert_eq!(config.http.port, 4200);
    }
}
