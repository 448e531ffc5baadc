//! # mtd-render
//!
//! Turns loosely structured model output into a print-ready `.docx`.
//!
//! Pipeline:
//! 1. [`normalize`](normalize::normalize): strip emphasis/heading markers and
//!    boilerplate filler, drop blank lines
//! 2. [`classify`](classify::classify): tag each line as table row, separator,
//!    heading, or prose with a bold/task role
//! 3. [`render`](render::render): fold classified lines plus metadata into an
//!    immutable block [`Document`](document::Document)
//! 4. [`write_docx`](docx::write_docx): serialize the blocks with `docx-rs`
//!
//! Steps 1–3 never fail: ragged tables, stray delimiters, and inconsistent
//! markdown are reconciled rather than rejected.

pub mod classify;
pub mod docx;
pub mod document;
pub mod labels;
pub mod normalize;
pub mod render;

mod error;

pub use document::{Align, Block, Document, GridTable, HeaderTable};
pub use docx::write_docx;
pub use error::RenderError;
pub use normalize::{NormalizedLine, normalize, normalize_text};
pub use render::{DocumentMeta, render};

use mtd_core::{TextRules, Typography};

/// Normalize, render, and serialize raw model text in one call.
///
/// # Errors
///
/// Returns [`RenderError::Pack`] if the archive cannot be written.
pub fn render_to_docx(
    raw: &str,
    meta: &DocumentMeta,
    rules: &TextRules,
    typography: &Typography,
) -> Result<Vec<u8>, RenderError> {
    let lines = normalize(raw, rules);
    let document = render(&lines, meta, rules);
    let bytes = write_docx(&document, typography)?;
    tracing::debug!(
        lines = lines.len(),
        blocks = document.blocks().len(),
        bytes = bytes.len(),
        "rendered docx"
    );
    Ok(bytes)
}
