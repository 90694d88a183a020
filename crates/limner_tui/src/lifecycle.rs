//! The generation lifecycle: Idle → Busy → Idle, one request per trigger.

use crate::app::{App, OutputState};
use crate::collect::{self, CollectError};
use limner_core::CompletionDriver;
use limner_render::render_markdown;
use ratatui::text::Text;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{error, info};

/// Fallback when a failure carries no message of its own.
pub const GENERIC_ERROR: &str = "An unknown error occurred.";

/// Notice for a successful call that returned no text.
pub const EMPTY_RESPONSE_NOTICE: &str = "Received an empty response from the model.";

/// Resolution of one cycle, sent back to the event loop exactly once.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// Success with text; holds the rendered markdown
    Rendered(Text<'static>),
    /// Success with empty text
    Empty,
    /// Failure; holds the derived message
    Failed(String),
}

/// Starts a generation cycle from the current form state.
///
/// A no-op while busy: the trigger control is not actionable during a
/// cycle. An empty prompt short-circuits with the inline notice and issues
/// no request. Otherwise the app enters Busy (output cleared, loader on)
/// and the driver call runs on a background task that resolves every path
/// into exactly one [`CycleOutcome`] message.
pub fn trigger_generation(
    app: &mut App,
    driver: Arc<dyn CompletionDriver>,
    outcomes: UnboundedSender<CycleOutcome>,
) {
    if app.busy {
        return;
    }

    let request = match collect::collect(app) {
        Ok(request) => request,
        Err(CollectError::EmptyPrompt) => {
            app.output = OutputState::NoPrompt;
            return;
        }
        Err(other) => {
            app.output = OutputState::Failed(other.to_string());
            return;
        }
    };

    app.busy = true;
    app.output = OutputState::Blank;
    app.output_scroll = 0;

    info!(model = %request.model(), "Generation started");

    tokio::spawn(async move {
        let outcome = run_cycle(driver.as_ref(), &request).await;
        // The receiver only disappears when the app is shutting down.
        let _ = outcomes.send(outcome);
    });
}

async fn run_cycle(
    driver: &dyn CompletionDriver,
    request: &limner_core::GenerateRequest,
) -> CycleOutcome {
    match driver.generate(request).await {
        Ok(response) if response.is_empty() => CycleOutcome::Empty,
        Ok(response) => CycleOutcome::Rendered(render_markdown(response.text())),
        Err(err) => {
            error!(error = %err, "Generation failed");
            let message = if err.message().trim().is_empty() {
                GENERIC_ERROR.to_string()
            } else {
                err.message().to_string()
            };
            CycleOutcome::Failed(message)
        }
    }
}

/// Finishes a cycle: writes the outcome to the output pane and restores
/// Idle. Runs exactly once per cycle, whatever the outcome was.
pub fn complete_generation(app: &mut App, outcome: CycleOutcome) {
    app.output = match outcome {
        CycleOutcome::Rendered(text) => OutputState::Rendered(text),
        CycleOutcome::Empty => OutputState::EmptyResponse,
        CycleOutcome::Failed(message) => OutputState::Failed(message),
    };
    app.busy = false;
}
