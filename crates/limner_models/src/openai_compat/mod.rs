//! Client for OpenAI-compatible chat completion APIs.
//!
//! This module covers any provider that accepts the OpenAI chat completions
//! request shape. The hosted Gemini compatibility endpoint is the default
//! target.

mod client;
mod conversions;
mod dto;

pub use client::OpenAICompatibleClient;
pub use dto::{ChatMessage, ChatRequest, ChatResponse, OpenAICompatError};
