//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Pantry JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "pantry-json", about = "Pantry JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request logging and metrics settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const DATABASE_URL: &str = "postgres://pantry@localhost/pantry";

    #[test]
    fn defaults_apply_when_only_database_url_is_given() -> TestResult {
        let config = ServerConfig::try_parse_from(["pantry-json", "--database-url", DATABASE_URL])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:4000");
        assert_eq!(config.database.database_max_connections, 10);
        assert_eq!(config.observability.slow_request_threshold_ms, 1_000);
        assert!(config.observability.metrics_enabled);

        Ok(())
    }

    #[test]
    fn flags_override_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "pantry-json",
            "--database-url",
            DATABASE_URL,
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--log-format",
            "json",
            "--metrics-enabled",
            "false",
        ])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:8080");
        assert!(matches!(
            config.logging.log_format,
            observability::LogFormat::Json
        ));
        assert!(!config.observability.metrics_enabled);

        Ok(())
    }
}
