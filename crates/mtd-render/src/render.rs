//! Assemble a document from normalized lines and request metadata.
//!
//! The body is a fold over classified lines. Table rows accumulate in a
//! pending buffer; the first non-table line (or the end of input) flushes the
//! buffer into one grid table followed by a spacer. Separator rows are skipped
//! without flushing.

use mtd_core::{DocumentKind, GenerationRequest, Language, TextRules};

use crate::classify::{LineKind, LineRole, classify};
use crate::document::{Align, Block, Document, GridTable, HeaderTable};
use crate::labels::Labels;
use crate::normalize::NormalizedLine;

const NAME_BLANK: &str = "____________________";
const DATE_BLANK: &str = "____.____.20__";
const SCORE_BLANK: &str = "___";
const MARK_BLANK: &str = "_____";
const SIGNATURE_BLANK: &str = "____________";
const ANSWER_BLANK_LEN: usize = 50;
const RULE_LEN: usize = 45;

/// Metadata printed around the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMeta {
    pub title: String,
    pub subject: String,
    pub grade: String,
    pub teacher: String,
    pub max_score: u32,
    pub kind: DocumentKind,
    pub student: Option<String>,
    pub variant: Option<u32>,
    pub language: Language,
}

impl From<&GenerationRequest> for DocumentMeta {
    fn from(request: &GenerationRequest) -> Self {
        Self {
            title: request.title(),
            subject: request.subject.clone(),
            grade: request.grade.to_string(),
            teacher: request.teacher.clone(),
            max_score: request.max_score.get(),
            kind: request.kind,
            student: request.student.clone(),
            variant: request.variant,
            language: request.language,
        }
    }
}

/// Render normalized lines into a document. Never fails.
#[must_use]
pub fn render(lines: &[NormalizedLine], meta: &DocumentMeta, rules: &TextRules) -> Document {
    let labels = Labels::for_language(meta.language);
    let mut blocks = Vec::new();

    if meta.kind.has_student_header() {
        blocks.push(Block::Header(header(meta, labels)));
        blocks.push(Block::Spacer);
    }

    blocks.push(Block::Title {
        text: meta.title.trim().to_uppercase(),
    });
    if let Some(variant) = meta.variant {
        blocks.push(Block::Subtitle {
            text: format!("{}: {variant}", labels.variant),
        });
    }

    let body = lines
        .iter()
        .map(|line| classify(line, rules))
        .fold(Body::new(meta.kind, rules, labels), Body::push)
        .finish();
    tracing::debug!(blocks = body.len(), kind = %meta.kind, "rendered body");
    blocks.extend(body);

    footer(&mut blocks, meta, labels);
    Document::new(blocks)
}

fn header(meta: &DocumentMeta, labels: &Labels) -> HeaderTable {
    let student = meta
        .student
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(NAME_BLANK);

    let score_line = if meta.kind.is_assessment() {
        format!("{}: {SCORE_BLANK} / {}", labels.score, meta.max_score)
    } else {
        format!("{}: {MARK_BLANK}", labels.mark)
    };

    HeaderTable {
        left: [
            format!("{}: {student}", labels.student),
            format!(
                "{}: {} | {}: {}",
                labels.subject, meta.subject, labels.grade, meta.grade
            ),
        ],
        right: [
            vec![format!("{}: {DATE_BLANK}", labels.date)],
            vec![labels.kind(meta.kind).to_string(), score_line],
        ],
    }
}

fn footer(blocks: &mut Vec<Block>, meta: &DocumentMeta, labels: &Labels) {
    blocks.extend(std::iter::repeat_n(Block::Spacer, meta.kind.footer_spacing()));
    blocks.push(Block::Rule {
        text: "_".repeat(RULE_LEN),
    });

    let teacher = match meta.teacher.trim() {
        "" => NAME_BLANK,
        name => name,
    };
    let align = if meta.kind.signature_right_aligned() {
        Align::Right
    } else {
        Align::Left
    };
    blocks.push(Block::Signature {
        text: format!(
            "{}: {teacher} {SIGNATURE_BLANK} ({})",
            labels.teacher, labels.signature
        ),
        align,
    });
}

/// Fold state for the document body.
struct Body<'a> {
    blocks: Vec<Block>,
    pending_rows: Vec<Vec<String>>,
    answer_blanks: bool,
    rules: &'a TextRules,
    labels: &'a Labels,
}

impl<'a> Body<'a> {
    const fn new(kind: DocumentKind, rules: &'a TextRules, labels: &'a Labels) -> Self {
        Self {
            blocks: Vec::new(),
            pending_rows: Vec::new(),
            answer_blanks: kind.is_assessment(),
            rules,
            labels,
        }
    }

    fn push(mut self, line: LineKind) -> Self {
        if !line.is_table() {
            self.flush_table();
        }

        match line {
            LineKind::TableSeparator => {}
            LineKind::TableRow(cells) => {
                if !cells.is_empty() {
                    self.pending_rows.push(cells);
                }
            }
            LineKind::Heading { level, text, role } => {
                let blank = self.answer_blank_for(&text, role);
                self.blocks.push(Block::Heading { level, text });
                self.blocks.extend(blank);
            }
            LineKind::Prose { text, role } => {
                let blank = self.answer_blank_for(&text, role);
                self.blocks.push(Block::Paragraph {
                    text,
                    bold: role.is_bold(),
                });
                self.blocks.extend(blank);
            }
        }
        self
    }

    fn answer_blank_for(&self, text: &str, role: LineRole) -> Option<Block> {
        (self.answer_blanks && role == LineRole::Task && self.rules.wants_answer_blank(text)).then(
            || Block::AnswerLine {
                text: format!("{}: {}", self.labels.answer, "_".repeat(ANSWER_BLANK_LEN)),
            },
        )
    }

    fn flush_table(&mut self) {
        if self.pending_rows.is_empty() {
            return;
        }
        let rows = std::mem::take(&mut self.pending_rows);
        if let Some(table) = GridTable::from_rows(rows) {
            self.blocks.push(Block::Table(table));
            self.blocks.push(Block::Spacer);
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_table();
        self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use pretty_assertions::assert_eq;

    fn meta(kind: DocumentKind) -> DocumentMeta {
        DocumentMeta {
            title: "Линейные уравнения".into(),
            subject: "Математика".into(),
            grade: "7".into(),
            teacher: "Иванова А.".into(),
            max_score: 10,
            kind,
            student: None,
            variant: None,
            language: Language::Bilingual,
        }
    }

    fn render_raw(raw: &str, kind: DocumentKind) -> Document {
        let rules = TextRules::default();
        render(&normalize(raw, &rules), &meta(kind), &rules)
    }

    #[test]
    fn assessment_header_shows_score_out_of_max() {
        let doc = render_raw("", DocumentKind::Summative);
        let header = doc.header().expect("header");
        assert_eq!(header.left[0], "Оқушы / Ученик: ____________________");
        assert_eq!(header.left[1], "Пән / Предмет: Математика | Сынып / Класс: 7");
        assert_eq!(header.right[0], vec!["Күні / Дата: ____.____.20__"]);
        assert_eq!(header.right[1], vec!["БЖБ / СОР", "Балл: ___ / 10"]);
    }

    #[test]
    fn worksheet_header_shows_mark_placeholder() {
        let doc = render_raw("", DocumentKind::Worksheet);
        let header = doc.header().expect("header");
        assert_eq!(
            header.right[1],
            vec!["Жұмыс парағы / Рабочий лист", "Баға / Оценка: _____"]
        );
    }

    #[test]
    fn student_name_replaces_blank() {
        let rules = TextRules::default();
        let mut m = meta(DocumentKind::Inclusion);
        m.student = Some("Асқар Б.".into());
        let doc = render(&[], &m, &rules);
        assert_eq!(doc.header().expect("header").left[0], "Оқушы / Ученик: Асқар Б.");
    }

    #[test]
    fn lesson_plan_has_no_header_and_right_signature() {
        let doc = render_raw("Этап 1. Организационный момент", DocumentKind::LessonPlan);
        assert!(doc.header().is_none());
        assert!(matches!(doc.blocks()[0], Block::Title { .. }));
        let (_, align) = doc.signature().expect("signature");
        assert_eq!(align, Align::Right);
    }

    #[test]
    fn title_is_uppercased_unicode() {
        let rules = TextRules::default();
        let mut m = meta(DocumentKind::Worksheet);
        m.title = "қазақ әдебиеті".into();
        let doc = render(&[], &m, &rules);
        assert_eq!(doc.title(), Some("ҚАЗАҚ ӘДЕБИЕТІ"));
    }

    #[test]
    fn variant_adds_subtitle() {
        let rules = TextRules::default();
        let mut m = meta(DocumentKind::Test);
        m.variant = Some(2);
        let doc = render(&[], &m, &rules);
        assert!(doc.blocks().contains(&Block::Subtitle {
            text: "Нұсқа / Вариант: 2".into()
        }));
    }

    #[test]
    fn footer_signature_line() {
        let doc = render_raw("", DocumentKind::Worksheet);
        let (text, align) = doc.signature().expect("signature");
        assert_eq!(text, "Мұғалім / Учитель: Иванова А. ____________ (қолы / подпись)");
        assert_eq!(align, Align::Left);
        let rule_at = doc
            .blocks()
            .iter()
            .position(|b| matches!(b, Block::Rule { .. }))
            .expect("rule");
        assert!(matches!(doc.blocks()[rule_at + 1], Block::Signature { .. }));
    }

    #[test]
    fn assessment_footer_has_extra_spacing() {
        let doc = render_raw("", DocumentKind::Test);
        let rule_at = doc
            .blocks()
            .iter()
            .position(|b| matches!(b, Block::Rule { .. }))
            .expect("rule");
        assert_eq!(doc.blocks()[rule_at - 1], Block::Spacer);
        assert_eq!(doc.blocks()[rule_at - 2], Block::Spacer);
    }

    #[test]
    fn prose_between_tables_splits_them() {
        let doc = render_raw(
            "| a | b |\n| 1 | 2 |\nМежду таблицами\n| c |\n| 3 |",
            DocumentKind::Worksheet,
        );
        let tables: Vec<_> = doc.tables().collect();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].columns(), 2);
        assert_eq!(tables[1].columns(), 1);
    }

    #[test]
    fn table_flush_emits_spacer_before_next_paragraph() {
        let doc = render_raw("| a |\nПосле", DocumentKind::Worksheet);
        let table_at = doc
            .blocks()
            .iter()
            .position(|b| matches!(b, Block::Table(_)))
            .expect("table");
        assert_eq!(doc.blocks()[table_at + 1], Block::Spacer);
        assert_eq!(
            doc.blocks()[table_at + 2],
            Block::Paragraph {
                text: "После".into(),
                bold: false
            }
        );
    }

    #[test]
    fn empty_rows_do_not_start_a_table() {
        let doc = render_raw("| |\n|---|\nТекст", DocumentKind::Worksheet);
        assert_eq!(doc.tables().count(), 0);
    }

    #[test]
    fn no_answer_blank_outside_assessments() {
        let doc = render_raw("Задание 1. Решите", DocumentKind::Worksheet);
        assert!(
            !doc.blocks()
                .iter()
                .any(|b| matches!(b, Block::AnswerLine { .. }))
        );
    }

    #[test]
    fn no_answer_blank_for_text_tasks_or_sections() {
        let doc = render_raw(
            "Задание 2. Прочитайте текст\nДескрипторы\nКритерии оценивания",
            DocumentKind::Summative,
        );
        assert!(
            !doc.blocks()
                .iter()
                .any(|b| matches!(b, Block::AnswerLine { .. }))
        );
        assert!(doc.paragraphs().all(|(_, bold)| bold));
    }

    #[test]
    fn task_heading_gets_answer_blank() {
        let doc = render_raw("## Тапсырма 1", DocumentKind::Test);
        let heading_at = doc
            .blocks()
            .iter()
            .position(|b| matches!(b, Block::Heading { .. }))
            .expect("heading");
        assert!(matches!(
            doc.blocks()[heading_at + 1],
            Block::AnswerLine { .. }
        ));
    }
}
