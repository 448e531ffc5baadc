//! Generation error types.

use thiserror::Error;

/// Errors that can occur when asking the model for text.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Quota or capacity exhausted (429, 503, or `RESOURCE_EXHAUSTED`).
    #[error("model is overloaded or quota exhausted: {0}")]
    ResourceExhausted(String),

    /// The model answered without any text.
    #[error("model returned no text")]
    Empty,

    /// Failed to parse a backend response.
    #[error("parse error: {0}")]
    Parse(String),
}

impl GenerationError {
    /// Only capacity errors resolve by waiting; everything else fails fast.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::ResourceExhausted(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exhaustion_is_transient() {
        assert!(GenerationError::ResourceExhausted("429".into()).is_transient());
        assert!(!GenerationError::Empty.is_transient());
        assert!(!GenerationError::Parse("bad json".into()).is_transient());
        assert!(
            !GenerationError::Api {
                status: 400,
                message: "bad request".into()
            }
            .is_transient()
        );
    }
}
