//! Core data types for the Limner generation client.
//!
//! This crate provides the request/response model shared by the completion
//! client and the terminal UI, plus the [`CompletionDriver`] seam the UI
//! calls through so tests can substitute a scripted driver.

mod driver;
mod message;
mod model;
mod request;
mod role;
mod sampling;

pub use driver::{CompletionDriver, DriverError};
pub use message::Message;
pub use model::ModelId;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use sampling::{SamplingParams, SamplingParamsBuilder, SamplingParamsBuilderError};
