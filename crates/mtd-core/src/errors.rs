//! Cross-cutting error types for Metodist.
//!
//! Domain-specific errors (e.g., `RenderError`, `GenerationError`) are defined
//! in their respective crates. They converge in `mtd-cli` through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Metodist crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Request data failed validation (range, emptiness).
    #[error("Validation error: {0}")]
    Validation(String),
}
