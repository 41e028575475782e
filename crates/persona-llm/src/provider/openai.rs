//! OpenAI-compatible completion client

use std::time::Duration;

use async_trait::async_trait;
use persona_config::{DEFAULT_BASE_URL, LlmConfig};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::CompletionClient;
use crate::error::LlmError;
use crate::protocol::openai::{self, OpenAiRequest, OpenAiResponse};
use crate::types::{CompletionRequest, CompletionResponse};

/// Client for any API speaking the `OpenAI` chat completions format
pub struct OpenAiCompatibleClient {
    name: String,
    client: Client,
    base_url: Url,
    api_key: SecretString,
}

impl OpenAiCompatibleClient {
    /// Create from the `[llm]` configuration section
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Configuration` if the API key is missing or the
    /// HTTP client cannot be built.
    pub fn new(name: impl Into<String>, config: &LlmConfig) -> Result<Self, LlmError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| LlmError::Configuration("api key is required".to_owned()))?;

        let base_url = match &config.base_url {
            Some(url) => url.clone(),
            None => Url::parse(DEFAULT_BASE_URL).map_err(|e| LlmError::Configuration(e.to_string()))?,
        };

        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder
            .build()
            .map_err(|e| LlmError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            name: name.into(),
            client,
            base_url,
            api_key,
        })
    }

    /// Build the chat completions URL
    fn completions_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/chat/completions")
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompatibleClient {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let wire_request = OpenAiRequest::from(request);

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(provider = %self.name, error = %e, "completion request failed");
                LlmError::Request(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(provider = %self.name, %status, "completion API returned error");
            return Err(LlmError::Status {
                status,
                message: openai::error_message(&body),
            });
        }

        let wire_response: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

        Ok(wire_response.into())
    }
}
