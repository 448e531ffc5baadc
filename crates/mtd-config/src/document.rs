//! Defaults applied to every generated document.

use mtd_core::{Language, Typography};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DocumentConfig {
    /// Teacher name printed in the signature line.
    #[serde(default)]
    pub teacher: String,

    #[serde(default)]
    pub language: Language,

    /// Font family and sizes, written inline in `[document]`.
    #[serde(flatten)]
    pub typography: Typography,
}
