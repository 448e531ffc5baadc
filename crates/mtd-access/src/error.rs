//! Allow-list error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessError {
    /// HTTP transport error while fetching the sheet.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The sheet export URL answered with a non-success status.
    #[error("sheet export returned status {status}")]
    Status { status: u16 },
}
