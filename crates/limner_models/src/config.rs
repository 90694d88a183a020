//! Client configuration sourced from the environment.

use limner_error::ConfigError;

/// Environment variable holding the API credential.
///
/// The credential is supplied out-of-band; it is never entered through the
/// UI and never logged.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// The hosted Gemini OpenAI-compatibility endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Connection settings for the completion client.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct ClientConfig {
    /// Base URL of the OpenAI-compatible API
    base_url: String,
    /// Bearer credential
    api_key: String,
}

impl ClientConfig {
    /// Creates a config with an explicit key and base URL.
    ///
    /// A trailing slash on the base URL is dropped so path joining stays
    /// uniform.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Reads the credential from [`API_KEY_VAR`], using the default base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_base_url(DEFAULT_BASE_URL)
    }

    /// Reads the credential from [`API_KEY_VAR`] with a caller-chosen base URL.
    pub fn from_env_with_base_url(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key, base_url)),
            _ => Err(ConfigError::new(format!(
                "{API_KEY_VAR} is not set; export it or add it to .env"
            ))),
        }
    }

    /// Full URL of the chat completions resource.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let config = ClientConfig::new("k", "https://example.test/v1/");
        assert_eq!(
            config.completions_url(),
            "https://example.test/v1/chat/completions"
        );
    }
}
