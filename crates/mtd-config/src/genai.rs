//! Text-generation backend configuration.

use serde::{Deserialize, Serialize};

fn default_model() -> String {
    String::from("gemini-1.5-flash")
}

fn default_endpoint() -> String {
    String::from("https://generativelanguage.googleapis.com")
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenaiConfig {
    /// API key sent as the `key` query parameter.
    #[serde(default)]
    pub api_key: String,

    /// Model name, e.g. `gemini-1.5-flash`.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL without the `/v1beta/...` path.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Upper bound on generated tokens. Unset leaves the model default.
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
}

impl Default for GenaiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            max_output_tokens: None,
        }
    }
}

impl GenaiConfig {
    /// An API key is the only field without a usable default.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = GenaiConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.timeout_secs, 60);
        assert!(config.max_output_tokens.is_none());
    }

    #[test]
    fn configured_with_api_key() {
        let config = GenaiConfig {
            api_key: "AIza-test".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }
}
