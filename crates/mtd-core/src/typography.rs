//! Font settings applied when serializing a document.

use serde::{Deserialize, Serialize};

fn default_font() -> String {
    String::from("Times New Roman")
}

const fn default_body_pt() -> usize {
    12
}

const fn default_title_pt() -> usize {
    14
}

const fn default_heading_pt() -> usize {
    13
}

const fn default_table_pt() -> usize {
    10
}

/// Font family and point sizes for the produced `.docx`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Typography {
    #[serde(default = "default_font")]
    pub font: String,
    #[serde(default = "default_body_pt")]
    pub body_pt: usize,
    #[serde(default = "default_title_pt")]
    pub title_pt: usize,
    #[serde(default = "default_heading_pt")]
    pub heading_pt: usize,
    #[serde(default = "default_table_pt")]
    pub table_pt: usize,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font: default_font(),
            body_pt: default_body_pt(),
            title_pt: default_title_pt(),
            heading_pt: default_heading_pt(),
            table_pt: default_table_pt(),
        }
    }
}

impl Typography {
    /// Convert a point size to the half-point unit used by OOXML.
    #[must_use]
    pub const fn half_points(pt: usize) -> usize {
        pt * 2
    }
}
