//! The seam between the UI lifecycle and the hosted completion service.

use crate::{GenerateRequest, GenerateResponse};
use async_trait::async_trait;

/// Error surfaced by a completion driver.
///
/// The lifecycle controller displays failures rather than distinguishing
/// them, so every failure class collapses to one displayable message at this
/// boundary. Provider crates keep their structured errors internally and
/// convert on the way out.
#[derive(Debug, Clone, derive_more::Display)]
#[display("{}", message)]
pub struct DriverError {
    message: String,
}

impl DriverError {
    /// Creates a driver error from any displayable source.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable failure text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::error::Error for DriverError {}

/// A client capable of one request/response completion exchange.
///
/// Exactly one call is issued per generation cycle; implementations do not
/// retry, stream, or time out.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Issues one completion call and waits for the full response.
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, DriverError>;
}
