//! Document kinds and instruction languages.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Presentation rules that depend on the kind (header presence, answer blanks,
//! footer layout) are exposed as `const fn` predicates.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// DocumentKind
// ---------------------------------------------------------------------------

/// Kind of classroom document being produced.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Practice worksheet for the whole class.
    #[default]
    #[serde(alias = "practice")]
    Worksheet,
    /// Summative assessment (БЖБ / СОР).
    #[serde(alias = "assessment", alias = "sor")]
    Summative,
    /// Short-term lesson plan (ҚМЖ / КСП).
    #[serde(alias = "plan")]
    LessonPlan,
    /// Test with answer key.
    Test,
    /// Inclusion-adapted individual sheet.
    #[serde(alias = "inclusive")]
    Inclusion,
}

impl DocumentKind {
    pub const ALL: [Self; 5] = [
        Self::Worksheet,
        Self::Summative,
        Self::LessonPlan,
        Self::Test,
        Self::Inclusion,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Worksheet => "worksheet",
            Self::Summative => "summative",
            Self::LessonPlan => "lesson_plan",
            Self::Test => "test",
            Self::Inclusion => "inclusion",
        }
    }

    /// Whether the document is graded against a maximum score.
    #[must_use]
    pub const fn is_assessment(self) -> bool {
        matches!(self, Self::Summative | Self::Test)
    }

    /// Lesson plans are addressed to the teacher and carry no student header.
    #[must_use]
    pub const fn has_student_header(self) -> bool {
        !matches!(self, Self::LessonPlan)
    }

    /// Individualized documents are produced for one named student.
    #[must_use]
    pub const fn is_individual(self) -> bool {
        matches!(self, Self::Inclusion)
    }

    /// Number of blank spacer lines placed above the footer rule.
    #[must_use]
    pub const fn footer_spacing(self) -> usize {
        if self.is_assessment() { 2 } else { 1 }
    }

    /// Whether the teacher signature line is right-aligned.
    #[must_use]
    pub const fn signature_right_aligned(self) -> bool {
        matches!(self, Self::LessonPlan | Self::Inclusion)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// Instruction language of the generated material and its labels.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// Kazakh and Russian side by side (`Оқушы / Ученик`).
    #[default]
    Bilingual,
    #[serde(alias = "kk", alias = "kz")]
    Kazakh,
    #[serde(alias = "ru")]
    Russian,
    #[serde(alias = "en")]
    English,
}

impl Language {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bilingual => "bilingual",
            Self::Kazakh => "kazakh",
            Self::Russian => "russian",
            Self::English => "english",
        }
    }

    /// Human-readable language name used inside generation prompts.
    #[must_use]
    pub const fn prompt_name(self) -> &'static str {
        match self {
            Self::Bilingual => "казахском и русском языках",
            Self::Kazakh => "казахском языке",
            Self::Russian => "русском языке",
            Self::English => "английском языке",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
