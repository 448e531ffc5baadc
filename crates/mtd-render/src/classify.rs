//! Line classification: decide what each normalized line becomes.

use mtd_core::TextRules;

use crate::normalize::NormalizedLine;

const CELL_DELIMITER: char = '|';

/// Typographic role of a prose or heading line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    Plain,
    /// Section keyword (criteria, descriptor, answer key, stage): bold.
    Section,
    /// Task keyword: bold, and may be followed by an answer blank.
    Task,
}

impl LineRole {
    #[must_use]
    pub const fn is_bold(self) -> bool {
        !matches!(self, Self::Plain)
    }
}

/// What a normalized line renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `|---|:--:|` header separator. Contributes no cells, keeps the table open.
    TableSeparator,
    /// Pipe-delimited row; empty segments already removed (may hold no cells).
    TableRow(Vec<String>),
    Heading {
        level: u8,
        text: String,
        role: LineRole,
    },
    Prose {
        text: String,
        role: LineRole,
    },
}

impl LineKind {
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, Self::TableSeparator | Self::TableRow(_))
    }
}

/// Classify one normalized line.
#[must_use]
pub fn classify(line: &NormalizedLine, rules: &TextRules) -> LineKind {
    let text = line.text();

    if text.starts_with(CELL_DELIMITER) {
        if is_separator_row(text) {
            return LineKind::TableSeparator;
        }
        return LineKind::TableRow(split_cells(text));
    }

    let role = role_of(text, rules);
    match line.heading() {
        Some(level) => LineKind::Heading {
            level,
            text: text.to_string(),
            role,
        },
        None => LineKind::Prose {
            text: text.to_string(),
            role,
        },
    }
}

fn role_of(text: &str, rules: &TextRules) -> LineRole {
    if rules.is_task(text) {
        LineRole::Task
    } else if rules.is_section(text) {
        LineRole::Section
    } else {
        LineRole::Plain
    }
}

/// A row made only of delimiters, dashes, alignment colons, and whitespace.
fn is_separator_row(text: &str) -> bool {
    text.chars()
        .all(|c| c == CELL_DELIMITER || c == '-' || c == ':' || c.is_whitespace())
}

fn split_cells(text: &str) -> Vec<String> {
    text.split(CELL_DELIMITER)
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn kinds(raw: &str) -> Vec<LineKind> {
        let rules = TextRules::default();
        normalize(raw, &rules)
            .iter()
            .map(|line| classify(line, &rules))
            .collect()
    }

    #[rstest]
    #[case("|---|---|")]
    #[case("| :--- | ---: |")]
    #[case("|:-:|")]
    #[case("| |")]
    fn separator_rows(#[case] raw: &str) {
        assert_eq!(kinds(raw), vec![LineKind::TableSeparator]);
    }

    #[test]
    fn row_cells_are_trimmed_and_compacted() {
        assert_eq!(
            kinds("|  Шаг 1 |  | 1 |"),
            vec![LineKind::TableRow(vec!["Шаг 1".into(), "1".into()])]
        );
    }

    #[test]
    fn dash_inside_cell_is_not_a_separator() {
        assert_eq!(
            kinds("| - | x-y |"),
            vec![LineKind::TableRow(vec!["-".into(), "x-y".into()])]
        );
    }

    #[test]
    fn task_prefix_is_task_role() {
        assert_eq!(
            kinds("Задание 1. Решите уравнение"),
            vec![LineKind::Prose {
                text: "Задание 1. Решите уравнение".into(),
                role: LineRole::Task,
            }]
        );
    }

    #[test]
    fn keyword_mid_sentence_is_plain() {
        assert_eq!(
            kinds("Выполните задание по образцу"),
            vec![LineKind::Prose {
                text: "Выполните задание по образцу".into(),
                role: LineRole::Plain,
            }]
        );
    }

    #[test]
    fn heading_keeps_level_and_role() {
        assert_eq!(
            kinds("## Дескрипторы"),
            vec![LineKind::Heading {
                level: 2,
                text: "Дескрипторы".into(),
                role: LineRole::Section,
            }]
        );
    }

    #[test]
    fn heading_marked_table_row_is_still_a_row() {
        assert_eq!(
            kinds("# | a | b |"),
            vec![LineKind::TableRow(vec!["a".into(), "b".into()])]
        );
    }

    #[test]
    fn bold_roles() {
        assert!(!LineRole::Plain.is_bold());
        assert!(LineRole::Section.is_bold());
        assert!(LineRole::Task.is_bold());
    }
}
