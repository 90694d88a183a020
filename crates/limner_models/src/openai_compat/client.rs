//! Client for OpenAI-compatible chat completion endpoints.

use crate::config::ClientConfig;
use crate::openai_compat::{ChatResponse, OpenAICompatError, conversions};
use async_trait::async_trait;
use limner_core::{CompletionDriver, DriverError, GenerateRequest, GenerateResponse};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Client for any API following the OpenAI chat completions format.
///
/// Issues exactly one request per [`generate`](Self::generate) call; no
/// retries, no streaming, no timeout beyond the transport's own defaults.
#[derive(Debug, Clone)]
pub struct OpenAICompatibleClient {
    client: Client,
    config: ClientConfig,
}

impl OpenAICompatibleClient {
    /// Creates a client for the configured endpoint.
    pub fn new(config: ClientConfig) -> Self {
        debug!(url = %config.base_url(), "Created OpenAI-compatible client");
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Generates a completion for the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent, the API answers with
    /// a non-success status, or the response body cannot be parsed.
    #[instrument(skip(self, req), fields(model = %req.model()))]
    pub async fn generate(
        &self,
        req: &GenerateRequest,
    ) -> Result<GenerateResponse, OpenAICompatError> {
        let chat_request = conversions::to_chat_request(req)?;

        debug!(
            model = %req.model(),
            message_count = chat_request.messages().len(),
            "Sending request"
        );

        let response = self
            .client
            .post(self.config.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                OpenAICompatError::Http(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");

            return Err(OpenAICompatError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            OpenAICompatError::ResponseParsing(format!("Failed to parse JSON: {}", e))
        })?;

        debug!(choices = chat_response.choices.len(), "Received response");

        conversions::from_chat_response(&chat_response)
    }
}

#[async_trait]
impl CompletionDriver for OpenAICompatibleClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, DriverError> {
        OpenAICompatibleClient::generate(self, request)
            .await
            .map_err(DriverError::from)
    }
}
