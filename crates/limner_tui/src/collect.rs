//! The input collector: form state to generation request.

use crate::app::App;
use limner_core::{GenerateRequest, Message, Role, SamplingParams};

/// Rejection from the collector. No request is issued when collection fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CollectError {
    /// The prompt field is empty or whitespace-only
    #[display("Please enter a prompt.")]
    EmptyPrompt,

    /// A sampling value escaped its slider range
    #[display("Invalid sampling value: {}", _0)]
    InvalidSampling(String),
}

impl std::error::Error for CollectError {}

/// Reads the current control values into a request.
///
/// The only validation is the non-empty prompt check. The prompt is sent
/// as typed; a blanked-out system instruction sends no system message; only
/// sliders the user has touched contribute sampling parameters.
pub fn collect(app: &App) -> Result<GenerateRequest, CollectError> {
    if app.prompt.trim().is_empty() {
        return Err(CollectError::EmptyPrompt);
    }

    let mut messages = Vec::new();
    if !app.system_instruction.trim().is_empty() {
        messages.push(Message::new(Role::System, app.system_instruction.clone()));
    }
    messages.push(Message::new(Role::User, app.prompt.clone()));

    let mut sampling = SamplingParams::builder();
    if app.temperature.touched() {
        sampling.temperature(app.temperature.value());
    }
    if app.top_p.touched() {
        sampling.top_p(app.top_p.value());
    }
    if app.top_k.touched() {
        sampling.top_k(app.top_k.value() as u32);
    }
    let sampling = sampling
        .build()
        .map_err(|e| CollectError::InvalidSampling(e.to_string()))?;

    GenerateRequest::builder()
        .model(app.selected_model())
        .messages(messages)
        .sampling(sampling)
        .build()
        .map_err(|e| CollectError::InvalidSampling(e.to_string()))
}
