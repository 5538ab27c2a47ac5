//! Text-generation endpoint client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, instrument};

use crate::analysis::{
    config::AnalysisConfig,
    errors::AnalysisError,
    prompt,
    request::AnalysisRequest,
    service::{AnalysisService, NOT_CONFIGURED_RESPONSE},
};

const MAX_NEW_TOKENS: u32 = 512;
const TEMPERATURE: f64 = 0.2;

/// HTTP client for a hosted text-generation model.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    config: AnalysisConfig,
    http: Client,
}

impl InferenceClient {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(config: AnalysisConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, http })
    }

    async fn generate(
        &self,
        api_key: &str,
        model_id: &str,
        inputs: String,
    ) -> Result<String, AnalysisError> {
        let body = GenerationRequest {
            inputs,
            parameters: GenerationParameters {
                max_new_tokens: MAX_NEW_TOKENS,
                temperature: TEMPERATURE,
                return_full_text: false,
            },
        };

        let response = self
            .http
            .post(self.config.endpoint(model_id))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(AnalysisError::Transport)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            return Err(AnalysisError::UpstreamStatus { status, body });
        }

        let parsed: Value = response.json().await.map_err(AnalysisError::Transport)?;

        generated_text(parsed)
    }
}

#[async_trait]
impl AnalysisService for InferenceClient {
    #[instrument(name = "analysis.generate", skip_all)]
    async fn analyze(&self, request: AnalysisRequest) -> Result<String, AnalysisError> {
        let input = request.into_input()?;

        let Some((api_key, model_id)) = self.config.credentials() else {
            info!("analysis requested but no inference endpoint is configured");

            return Ok(NOT_CONFIGURED_RESPONSE.to_string());
        };

        let inputs = prompt::compose(&input.query, &input.sales_data);

        let result = self.generate(api_key, model_id, inputs).await;

        match &result {
            Ok(_) => info!(model = model_id, "analysis completed"),
            Err(AnalysisError::UpstreamStatus { status, body }) => {
                error!(model = model_id, %status, %body, "analysis endpoint returned an error");
            }
            Err(error) => error!(model = model_id, error = ?error, "analysis request failed"),
        }

        result
    }
}

#[derive(Debug, Serialize)]
struct GenerationRequest {
    inputs: String,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f64,
    return_full_text: bool,
}

#[derive(Debug, Deserialize)]
struct Generation {
    generated_text: String,
}

/// Pull `generated_text` out of the first element of the response array.
fn generated_text(body: Value) -> Result<String, AnalysisError> {
    let Value::Array(generations) = body else {
        return Err(AnalysisError::UnexpectedFormat);
    };

    let first = generations
        .into_iter()
        .next()
        .ok_or(AnalysisError::UnexpectedFormat)?;

    serde_json::from_value::<Generation>(first)
        .ok()
        .map(|generation| generation.generated_text)
        .ok_or(AnalysisError::UnexpectedFormat)
}
