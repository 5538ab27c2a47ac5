//! Server Config

use clap::Args;

/// Default body limit for `POST /genai-analyze`, which carries whole sales
/// snapshots.
pub const DEFAULT_ANALYSIS_BODY_LIMIT: usize = 16 * 1024 * 1024;

/// Listener and request-size settings.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Address to listen on; all interfaces by default
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "SERVER_PORT", default_value = "5000")]
    pub port: u16,

    /// Largest accepted analysis request body, in bytes
    #[arg(
        long,
        env = "ANALYSIS_BODY_LIMIT_BYTES",
        default_value_t = DEFAULT_ANALYSIS_BODY_LIMIT
    )]
    pub analysis_body_limit: usize,
}

impl ServerRuntimeConfig {
    /// Get the socket address for binding.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
