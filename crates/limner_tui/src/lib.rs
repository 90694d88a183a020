//! Terminal UI for the Limner generation client.
//!
//! One screen: a prompt editor, an optional system instruction, sampling
//! sliders with mirrored value labels, a model selector, and an output pane
//! that shows the rendered reply of the most recent generation cycle.
//!
//! The generation lifecycle lives in [`lifecycle`]: collect the form, mark
//! the app busy, issue exactly one completion call on a background task, and
//! restore idle unconditionally when the cycle's outcome message arrives.

pub mod app;
pub mod collect;
pub mod lifecycle;
mod run;
mod slider;
mod ui;

pub use app::{App, Focus, OutputState};
pub use collect::{collect, CollectError};
pub use lifecycle::{complete_generation, trigger_generation, CycleOutcome};
pub use run::run;
pub use slider::Slider;
