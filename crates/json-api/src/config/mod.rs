//! Server configuration module

use clap::Parser;

use crate::config::{
    analysis::AnalysisSettings, db::DatabaseConfig, observability::LoggingConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod analysis;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Stockroom JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "stockroom-json", about = "Stockroom JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Text-generation endpoint settings.
    #[command(flatten)]
    pub analysis: AnalysisSettings,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
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
    use std::time::Duration;

    use clap::CommandFactory;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        ServerConfig::command().debug_assert();
    }

    #[test]
    fn flags_override_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "stockroom-json",
            "--port",
            "8080",
            "--database-url",
            "sqlite://tmp/test.db",
            "--genai-model-id",
            "acme/model",
            "--genai-timeout-seconds",
            "5",
        ])?;

        assert_eq!(config.socket_addr(), format!("{}:8080", config.server.host));
        assert_eq!(config.database.database_url, "sqlite://tmp/test.db");
        assert_eq!(
            config.server.analysis_body_limit,
            server::DEFAULT_ANALYSIS_BODY_LIMIT
        );

        let analysis = config.analysis.into_config();

        assert_eq!(analysis.model_id.as_deref(), Some("acme/model"));
        assert_eq!(analysis.timeout, Duration::from_secs(5));

        Ok(())
    }
}
