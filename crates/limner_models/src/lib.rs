//! Provider client for the Limner generation client.
//!
//! One provider is supported: any service speaking the OpenAI chat
//! completions format. The default configuration points at the hosted
//! Gemini OpenAI-compatibility endpoint; the base URL is overridable for
//! other compatible services.

mod config;
mod openai_compat;

pub use config::{ClientConfig, API_KEY_VAR, DEFAULT_BASE_URL};
pub use openai_compat::{
    ChatMessage, ChatRequest, ChatResponse, OpenAICompatError, OpenAICompatibleClient,
};
