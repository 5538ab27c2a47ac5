//! Analysis delegate configuration.

use std::time::Duration;

/// Default inference endpoint base.
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";

/// Default upper bound on a single analysis call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the text-generation endpoint.
///
/// Analysis is only attempted when both `api_key` and `model_id` are set.
#[derive(Clone)]
pub struct AnalysisConfig {
    pub api_key: Option<String>,
    pub model_id: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl AnalysisConfig {
    /// Returns the API key and model id when both are configured and non-blank.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let api_key = self.api_key.as_deref().filter(|key| !key.trim().is_empty())?;
        let model_id = self.model_id.as_deref().filter(|id| !id.trim().is_empty())?;

        Some((api_key, model_id))
    }

    /// Endpoint for `model_id` under the configured base URL.
    #[must_use]
    pub fn endpoint(&self, model_id: &str) -> String {
        format!("{}/{model_id}", self.base_url.trim_end_matches('/'))
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model_id: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl std::fmt::Debug for AnalysisConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model_id", &self.model_id)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_require_key_and_model() {
        let mut config = AnalysisConfig {
            api_key: Some("secret".to_string()),
            ..AnalysisConfig::default()
        };

        assert_eq!(config.credentials(), None);

        config.model_id = Some("   ".to_string());

        assert_eq!(config.credentials(), None);

        config.model_id = Some("org/model".to_string());

        assert_eq!(config.credentials(), Some(("secret", "org/model")));
    }

    #[test]
    fn endpoint_joins_base_and_model() {
        let config = AnalysisConfig {
            base_url: "http://127.0.0.1:9000/models/".to_string(),
            ..AnalysisConfig::default()
        };

        assert_eq!(
            config.endpoint("org/model"),
            "http://127.0.0.1:9000/models/org/model"
        );
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = AnalysisConfig {
            api_key: Some("hf_secret".to_string()),
            ..AnalysisConfig::default()
        };

        let rendered = format!("{config:?}");

        assert!(!rendered.contains("hf_secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
