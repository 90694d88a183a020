//! Data transfer objects for the OpenAI chat completions format.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A message in the OpenAI chat format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

/// OpenAI chat completion request.
///
/// Optional fields are omitted from the payload entirely when unset; the
/// request carries exactly what was collected from the form and nothing
/// else.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatRequest {
    /// Model identifier
    model: String,
    /// Conversation messages
    messages: Vec<ChatMessage>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Nucleus sampling probability mass
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    /// Candidate pool size
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
}

impl ChatRequest {
    /// Creates a new builder for ChatRequest.
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }
}

/// The message part of a response choice.
///
/// `content` may be absent or null on the wire; both read back as `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChoiceMessage {
    /// The generated text
    #[serde(default)]
    pub content: Option<String>,
}

/// A choice in the OpenAI response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The message content
    #[serde(default)]
    pub message: ChoiceMessage,
    /// Reason for finishing
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatUsage {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_tokens: Option<usize>,
    /// Tokens in the completion
    #[serde(default)]
    pub completion_tokens: Option<usize>,
    /// Total tokens
    #[serde(default)]
    pub total_tokens: Option<usize>,
}

/// OpenAI chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Response choices
    pub choices: Vec<ChatChoice>,
    /// Token usage
    #[serde(default)]
    pub usage: Option<ChatUsage>,
}

/// Errors from OpenAI-compatible APIs.
#[derive(Debug, Clone, derive_more::Display)]
pub enum OpenAICompatError {
    /// HTTP/network error
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// API returned an error
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Invalid request
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),

    /// Failed to parse response
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),

    /// Builder error
    #[display("Builder error: {}", _0)]
    Builder(String),
}

impl std::error::Error for OpenAICompatError {}

impl From<OpenAICompatError> for limner_core::DriverError {
    fn from(err: OpenAICompatError) -> Self {
        limner_core::DriverError::new(err.to_string())
    }
}
