//! # mtd-genai
//!
//! Text generation for Metodist.
//!
//! - [`TextGenerator`]: the seam between the CLI and a model backend
//! - [`GeminiClient`]: Gemini `generateContent` over HTTP
//! - [`RetryPolicy`] / [`with_retry`]: fixed-delay retry of transient failures
//! - [`PromptBuilder`]: prompt text for a [`mtd_core::GenerationRequest`]

pub mod gemini;
pub mod prompt;
pub mod retry;

mod error;
mod http;

pub use error::GenerationError;
pub use gemini::GeminiClient;
pub use prompt::PromptBuilder;
pub use retry::{RetryPolicy, generate_with_retry, with_retry};

use async_trait::async_trait;

/// Anything that turns a prompt into raw model text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] on transport, API, or parse failures.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// A generator that always returns the same text. Useful offline.
#[derive(Debug, Clone)]
pub struct CannedGenerator(pub String);

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Ok(self.0.clone())
    }
}
