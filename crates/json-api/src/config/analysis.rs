//! Analysis Config

use std::time::Duration;

use clap::Args;
use stockroom_app::analysis::{AnalysisConfig, config::DEFAULT_BASE_URL};

/// Text-generation endpoint settings. Analysis answers with a fixed
/// "not configured" message unless both the key and model id are set.
#[derive(Debug, Args)]
pub struct AnalysisSettings {
    /// Inference API key
    #[arg(long, env = "GENAI_API_KEY", hide_env_values = true)]
    pub genai_api_key: Option<String>,

    /// Inference model identifier, appended to the base URL
    #[arg(long, env = "GENAI_MODEL_ID")]
    pub genai_model_id: Option<String>,

    /// Inference API base URL
    #[arg(long, env = "GENAI_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub genai_api_base_url: String,

    /// Timeout for a single analysis call, in seconds
    #[arg(long, env = "GENAI_TIMEOUT_SECONDS", default_value_t = 30_u64)]
    pub genai_timeout_seconds: u64,
}

impl AnalysisSettings {
    /// Convert into the delegate's configuration.
    #[must_use]
    pub fn into_config(self) -> AnalysisConfig {
        AnalysisConfig {
            api_key: self.genai_api_key,
            model_id: self.genai_model_id,
            base_url: self.genai_api_base_url,
            timeout: Duration::from_secs(self.genai_timeout_seconds),
        }
    }
}
