//! Cleanup of raw model text into render-ready lines.
//!
//! The model wraps its answer in markdown cosmetics (`**bold**`, `## headings`)
//! and conversational filler ("Конечно! Вот задания:"). Per physical line:
//!
//! 1. Delete emphasis markers (`*`).
//! 2. Delete leading heading markers (`#` runs plus one following space),
//!    remembering the level of the first run.
//! 3. Trim.
//! 4. Drop empty lines.
//! 5. Drop short lines containing a boilerplate fragment.
//!
//! The pass is pure, never fails, and is idempotent on the line text.

use std::fmt;
use std::ops::Deref;

use mtd_core::TextRules;
use serde::Serialize;

const EMPHASIS_MARKER: char = '*';
const HEADING_MARKER: char = '#';
const MAX_HEADING_LEVEL: usize = 6;

/// One non-empty line of cleaned content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedLine {
    text: String,
    heading: Option<u8>,
}

impl NormalizedLine {
    /// The cleaned line text. Never empty.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Heading level (1–6) if the source line carried heading markers.
    #[must_use]
    pub const fn heading(&self) -> Option<u8> {
        self.heading
    }
}

impl Deref for NormalizedLine {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for NormalizedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Normalize raw model output into an ordered list of clean lines.
#[must_use]
pub fn normalize(raw: &str, rules: &TextRules) -> Vec<NormalizedLine> {
    let mut dropped = 0usize;
    let lines: Vec<NormalizedLine> = raw
        .lines()
        .filter_map(|line| {
            let normalized = normalize_line(line, rules);
            if normalized.is_none() && !line.trim().is_empty() {
                dropped += 1;
            }
            normalized
        })
        .collect();

    tracing::debug!(kept = lines.len(), dropped, "normalized model text");
    lines
}

/// Normalize and keep only the text of each line.
#[must_use]
pub fn normalize_text(raw: &str, rules: &TextRules) -> Vec<String> {
    normalize(raw, rules)
        .into_iter()
        .map(|line| line.text)
        .collect()
}

fn normalize_line(line: &str, rules: &TextRules) -> Option<NormalizedLine> {
    let without_emphasis = strip_emphasis(line);
    let (heading, rest) = strip_heading(&without_emphasis);
    let text = rest.trim();

    if text.is_empty() || rules.is_boilerplate(text) {
        return None;
    }

    Some(NormalizedLine {
        text: text.to_string(),
        heading,
    })
}

/// Delete every emphasis run. Runs of any length decompose into 1–3 marker
/// chunks, so no marker survives.
fn strip_emphasis(line: &str) -> String {
    line.chars().filter(|c| *c != EMPHASIS_MARKER).collect()
}

/// Strip leading heading markers, returning the level of the first run.
fn strip_heading(line: &str) -> (Option<u8>, &str) {
    let mut rest = line.trim_start();
    let mut level = None;

    while rest.starts_with(HEADING_MARKER) {
        // '#' is ASCII, so the char count is also the byte length.
        let hashes = rest.chars().take_while(|c| *c == HEADING_MARKER).count();
        if level.is_none() {
            level = u8::try_from(hashes.min(MAX_HEADING_LEVEL)).ok();
        }
        rest = &rest[hashes..];
        rest = rest.strip_prefix(' ').unwrap_or(rest).trim_start();
    }

    (level, rest)
}
