//! Error types shared across the Limner workspace.
//!
//! Leaf crates define their own error enums where the variants are
//! domain-specific (see `OpenAICompatError` in `limner_models`); the types
//! here cover the cross-cutting failure classes of the binary itself.

mod config;

pub use config::ConfigError;

/// Top-level error for the Limner binary.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum LimnerError {
    /// Missing or invalid configuration.
    #[display("{}", _0)]
    Config(ConfigError),

    /// I/O failure: terminal setup/restore or the log file.
    #[display("I/O error: {}", _0)]
    Io(std::io::Error),
}

impl std::error::Error for LimnerError {}
