//! # mtd-config
//!
//! Layered configuration loading for Metodist using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`METODIST_*` prefix, `__` as separator)
//! 2. Project-level `.metodist/config.toml`
//! 3. User-level `~/.config/metodist/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `METODIST_GENAI__API_KEY` -> `genai.api_key`,
//! `METODIST_DOCUMENT__TEACHER` -> `document.teacher`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use mtd_config::MetodistConfig;
//!
//! let config = MetodistConfig::load_with_dotenv().expect("config");
//!
//! if config.genai.is_configured() {
//!     println!("model: {}", config.genai.model);
//! }
//! ```

mod access;
mod document;
mod error;
mod genai;
mod retry;

pub use access::AccessConfig;
pub use document::DocumentConfig;
pub use error::ConfigError;
pub use genai::GenaiConfig;
pub use retry::RetryConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use mtd_core::TextRules;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "METODIST_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MetodistConfig {
    #[serde(default)]
    pub genai: GenaiConfig,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub access: AccessConfig,
    #[serde(default)]
    pub document: DocumentConfig,
    #[serde(default)]
    pub rules: TextRules,
}

impl MetodistConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed, or
    /// [`ConfigError::InvalidValue`] if a loaded value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and callers can layer additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".metodist/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that would make generation or rendering meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retry.max_attempts == 0 {
            return Err(invalid("retry.max_attempts", "must be at least 1"));
        }
        if self.genai.timeout_secs == 0 {
            return Err(invalid("genai.timeout_secs", "must be positive"));
        }
        let typography = &self.document.typography;
        for (field, pt) in [
            ("document.body_pt", typography.body_pt),
            ("document.title_pt", typography.title_pt),
            ("document.heading_pt", typography.heading_pt),
            ("document.table_pt", typography.table_pt),
        ] {
            if pt == 0 {
                return Err(invalid(field, "font size must be positive"));
            }
        }
        Ok(())
    }

    /// The generation backend settings, if an API key is present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when `genai.api_key` is empty.
    pub fn require_genai(&self) -> Result<&GenaiConfig, ConfigError> {
        if self.genai.is_configured() {
            Ok(&self.genai)
        } else {
            Err(ConfigError::NotConfigured {
                section: "genai".into(),
            })
        }
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("metodist").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.into(),
        reason: reason.into(),
    }
}
