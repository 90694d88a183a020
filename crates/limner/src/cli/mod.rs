//! Command-line interface for the limner binary.

use limner_error::{ConfigError, LimnerError};
use limner_models::{ClientConfig, DEFAULT_BASE_URL};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Command-line arguments.
///
/// The API credential is supplied out-of-band: environment variable, `.env`
/// file, or flag. It is never entered through the UI.
#[derive(clap::Parser, Debug)]
#[command(name = "limner")]
#[command(about = "Terminal client for one-shot LLM generation with rendered markdown output")]
#[command(version)]
pub struct Cli {
    /// API credential for the completion endpoint
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the OpenAI-compatible endpoint
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Diagnostic log destination; the TUI owns the terminal, so tracing
    /// output goes to a file
    #[arg(long, default_value = "limner.log")]
    pub log_file: PathBuf,
}

impl Cli {
    /// Builds the client configuration, failing when no credential is
    /// available.
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        match &self.api_key {
            Some(key) if !key.trim().is_empty() => {
                Ok(ClientConfig::new(key.as_str(), self.base_url.as_str()))
            }
            _ => Err(ConfigError::new(
                "GEMINI_API_KEY is not set; export it, add it to .env, or pass --api-key",
            )),
        }
    }
}

/// Initializes the tracing subscriber, writing to the log file.
pub fn init_tracing(log_file: &Path) -> Result<(), LimnerError> {
    let file = std::fs::File::create(log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn missing_credential_is_a_config_error() {
        let cli = Cli::try_parse_from(["limner", "--base-url", "https://example.test/v1"]).unwrap();
        // No --api-key flag; the env fallback may be present on dev machines.
        if cli.api_key.is_none() {
            assert!(cli.client_config().is_err());
        }
    }

    #[test]
    fn flag_credential_builds_a_config() {
        let cli = Cli::try_parse_from(["limner", "--api-key", "k"]).unwrap();
        let config = cli.client_config().unwrap();
        assert_eq!(
            config.completions_url(),
            format!("{DEFAULT_BASE_URL}/chat/completions")
        );
    }
}
