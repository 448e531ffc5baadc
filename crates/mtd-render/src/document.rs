//! Immutable block model of a rendered document.

use serde::Serialize;

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// The 2×2 metadata table printed above the title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderTable {
    /// Left column: student line, subject/grade line.
    pub left: [String; 2],
    /// Right column (right-aligned): date cell, kind + score cell. A cell may
    /// hold several lines.
    pub right: [Vec<String>; 2],
}

/// A grid table whose every row has exactly `columns` cells.
///
/// The first row is the header row and is printed bold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridTable {
    columns: usize,
    rows: Vec<Vec<String>>,
}

impl GridTable {
    /// Build a table from ragged rows.
    ///
    /// The column count is taken from the first row; longer rows are truncated
    /// and shorter rows padded with blank cells. Returns `None` when there are
    /// no rows or the first row is empty.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<String>>) -> Option<Self> {
        let columns = rows.first().map(Vec::len).filter(|n| *n > 0)?;
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(columns, String::new());
                row
            })
            .collect();
        Some(Self { columns, rows })
    }

    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.rows[0]
    }
}

/// One top-level element of the document, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum Block {
    Header(HeaderTable),
    /// Upper-cased, centered, bold, larger font.
    Title { text: String },
    /// Centered line under the title (variant number).
    Subtitle { text: String },
    Heading { level: u8, text: String },
    Paragraph { text: String, bold: bool },
    /// Blank line for the student's answer.
    AnswerLine { text: String },
    Table(GridTable),
    Spacer,
    /// Horizontal rule drawn with underscores.
    Rule { text: String },
    Signature { text: String, align: Align },
}

/// A finished document: an ordered, immutable sequence of blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub(crate) const fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// All grid tables in order.
    pub fn tables(&self) -> impl Iterator<Item = &GridTable> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }

    /// All body paragraphs in order, as `(text, bold)`.
    pub fn paragraphs(&self) -> impl Iterator<Item = (&str, bool)> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Paragraph { text, bold } => Some((text.as_str(), *bold)),
            _ => None,
        })
    }

    #[must_use]
    pub fn header(&self) -> Option<&HeaderTable> {
        self.blocks.iter().find_map(|block| match block {
            Block::Header(header) => Some(header),
            _ => None,
        })
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Title { text } => Some(text.as_str()),
            _ => None,
        })
    }

    #[must_use]
    pub fn signature(&self) -> Option<(&str, Align)> {
        self.blocks.iter().find_map(|block| match block {
            Block::Signature { text, align } => Some((text.as_str(), *align)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| (*c).to_string()).collect()
    }

    #[test]
    fn ragged_rows_follow_first_row_width() {
        let table = GridTable::from_rows(vec![
            row(&["a", "b"]),
            row(&["1", "2", "3", "4"]),
            row(&["x"]),
        ])
        .expect("table");

        assert_eq!(table.columns(), 2);
        assert_eq!(
            table.rows(),
            &[row(&["a", "b"]), row(&["1", "2"]), row(&["x", ""])]
        );
    }

    #[test]
    fn empty_input_builds_no_table() {
        assert!(GridTable::from_rows(Vec::new()).is_none());
        assert!(GridTable::from_rows(vec![Vec::new()]).is_none());
    }
}
