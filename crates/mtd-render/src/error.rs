//! Render error types for mtd-render.

/// Errors that can occur while serializing a rendered document.
///
/// Normalization and rendering themselves never fail; malformed model output
/// is reconciled instead of rejected.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to pack .docx archive: {0}")]
    Pack(String),
}
