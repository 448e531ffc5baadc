//! The generated document artifact and the single-slot last-result cache.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::DocumentKind;

/// Longest slug kept from a subject or topic in a file name.
const MAX_SLUG_CHARS: usize = 40;

/// A rendered `.docx` buffer together with what produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDocument {
    /// Suggested download file name (filesystem-safe).
    pub file_name: String,
    /// Raw model text, kept for on-screen preview.
    pub preview: String,
    /// Serialized `.docx` bytes.
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub kind: DocumentKind,
    pub created_at: DateTime<Utc>,
}

impl GeneratedDocument {
    #[must_use]
    pub fn new(
        subject: &str,
        topic: &str,
        kind: DocumentKind,
        preview: String,
        bytes: Vec<u8>,
    ) -> Self {
        let created_at = Utc::now();
        Self {
            file_name: file_name(subject, topic, kind, created_at),
            preview,
            bytes,
            kind,
            created_at,
        }
    }
}

/// Build a unique, filesystem-safe `.docx` file name.
///
/// Letters and digits of any script are kept; any other run of characters collapses to `-`.
#[must_use]
pub fn file_name(subject: &str, topic: &str, kind: DocumentKind, at: DateTime<Utc>) -> String {
    let mut parts: Vec<String> = [subject, topic]
        .iter()
        .map(|part| slug(part))
        .filter(|part| !part.is_empty())
        .collect();
    parts.push(kind.as_str().to_string());
    parts.push(at.format("%Y%m%d-%H%M%S").to_string());
    format!("{}.docx", parts.join("_"))
}

fn slug(raw: &str) -> String {
    let mut out = String::new();
    let mut pending_sep = false;
    for c in raw.chars().take(MAX_SLUG_CHARS) {
        if c.is_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            out.push(c);
        } else {
            pending_sep = true;
        }
    }
    out
}

/// Holds at most one generated document; every store overwrites the previous one.
#[derive(Debug, Default)]
pub struct ResultSlot {
    last: Option<GeneratedDocument>,
}

impl ResultSlot {
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Replace the cached document, returning the one it displaced.
    pub fn store(&mut self, document: GeneratedDocument) -> Option<GeneratedDocument> {
        self.last.replace(document)
    }

    #[must_use]
    pub const fn last(&self) -> Option<&GeneratedDocument> {
        self.last.as_ref()
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn file_name_keeps_cyrillic_and_drops_separators() {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 5, 0).unwrap();
        let name = file_name("Қазақ тілі (Т1)", "Зат есім / сөз", DocumentKind::Summative, at);
        assert_eq!(name, "Қазақ-тілі-Т1_Зат-есім-сөз_summative_20260301-090500.docx");
    }

    #[test]
    fn file_name_skips_empty_slugs() {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 5, 0).unwrap();
        let name = file_name("///", "Topic", DocumentKind::Worksheet, at);
        assert_eq!(name, "Topic_worksheet_20260301-090500.docx");
    }

    #[test]
    fn slot_holds_one_document() {
        let mut slot = ResultSlot::new();
        let first = GeneratedDocument::new("a", "b", DocumentKind::Test, "one".into(), vec![1]);
        let second = GeneratedDocument::new("a", "b", DocumentKind::Test, "two".into(), vec![2]);

        assert!(slot.store(first).is_none());
        let displaced = slot.store(second).expect("first document displaced");
        assert_eq!(displaced.preview, "one");
        assert_eq!(slot.last().map(|d| d.bytes.clone()), Some(vec![2]));

        slot.clear();
        assert!(slot.last().is_none());
    }
}
