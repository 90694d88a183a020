//! Markdown rendering for the Limner output pane.
//!
//! The browser-facing ancestor of this code handed model output to a
//! markdown-to-HTML library with a syntax-highlighting callback. Here the
//! same pipeline targets a terminal: pulldown-cmark parses the text and the
//! event stream is folded into ratatui [`Text`](ratatui::text::Text), with
//! fenced code blocks highlighted through syntect keyed on the fence
//! language tag.
//!
//! Rendering is deterministic: the same input always produces the same
//! styled text. Model output is not sanitized; raw HTML fragments inside the
//! markdown are emitted as literal text.

mod highlight;
mod markdown;

pub use highlight::highlight_code;
pub use markdown::render_markdown;
