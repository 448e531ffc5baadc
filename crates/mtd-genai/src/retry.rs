//! Fixed-delay retry for transient generation failures.
//!
//! Only [`GenerationError::is_transient`] errors are retried; auth, request,
//! and parse errors surface on the first attempt.

use std::future::Future;
use std::time::Duration;

use mtd_config::RetryConfig;

use crate::error::GenerationError;
use crate::TextGenerator;

/// How many times to call the backend and how long to wait in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the initial one).
    pub max_attempts: u32,
    /// Pause before each retry.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(2),
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            delay: Duration::from_millis(config.delay_ms),
        }
    }
}

impl RetryPolicy {
    /// Single attempt, no waiting.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_attempts: 1,
            delay: Duration::ZERO,
        }
    }
}

/// Run `op` until it succeeds, fails permanently, or attempts run out.
///
/// # Errors
///
/// Returns the first non-transient error, or the last transient error once
/// `policy.max_attempts` calls have failed.
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, GenerationError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, GenerationError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_transient() && attempt < max_attempts => {
                tracing::warn!(
                    attempt,
                    max_attempts,
                    delay_ms = u64::try_from(policy.delay.as_millis()).unwrap_or(u64::MAX),
                    error = %e,
                    "transient generation error, retrying"
                );
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Generate text with retries, treating whitespace-only output as a failure.
///
/// # Errors
///
/// Returns [`GenerationError::Empty`] when the model answers with blank text,
/// otherwise whatever [`with_retry`] returns.
pub async fn generate_with_retry(
    generator: &dyn TextGenerator,
    prompt: &str,
    policy: &RetryPolicy,
) -> Result<String, GenerationError> {
    let text = with_retry(policy, || generator.generate(prompt)).await?;
    if text.trim().is_empty() {
        return Err(GenerationError::Empty);
    }
    Ok(text)
}
