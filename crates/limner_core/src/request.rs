//! Request and response types for one generation cycle.

use crate::{Message, ModelId, SamplingParams};
use serde::{Deserialize, Serialize};

/// One generation request, built at trigger time and consumed by the driver.
///
/// # Examples
///
/// ```
/// use limner_core::{GenerateRequest, Message, ModelId, Role};
///
/// let request = GenerateRequest::builder()
///     .model(ModelId::default())
///     .messages(vec![Message::new(Role::User, "Hello")])
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 1);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// Model identifier from the fixed selector list
    model: ModelId,
    /// Optional system message followed by the user prompt
    messages: Vec<Message>,
    /// Sampling controls; empty means the service's defaults apply
    #[builder(default)]
    sampling: SamplingParams,
}

impl GenerateRequest {
    /// Returns a builder for constructing a GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The text returned by a successful completion call.
///
/// An empty string is a legitimate success; the lifecycle controller maps it
/// to the empty-response notice rather than the error path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerateResponse {
    /// The generated text, possibly empty
    text: String,
}

impl GenerateResponse {
    /// Creates a response from the returned text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// True when the model returned no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
