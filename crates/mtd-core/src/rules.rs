//! Tunable text heuristics for cleaning and styling model output.
//!
//! Every list is overridable through the `[rules]` config section.
//!
//! Fragments only match at the start of a word, so `роль` never fires inside
//! `контроль`. Prefixes match whole words; a trailing `*` turns a prefix into
//! a stem (`дескриптор*` covers `Дескрипторы`).

use serde::{Deserialize, Serialize};

const fn default_short_line_threshold() -> usize {
    50
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn default_boilerplate() -> Vec<String> {
    strings(&[
        "роль",
        "рөл",
        "конечно",
        "вот ваш",
        "вот задания",
        "міне,",
        "of course here is",
        "here is your",
        "sure, here",
        "task:",
        "instruction:",
        "инструкция:",
        "нұсқаулық:",
        "as an ai",
    ])
}

fn default_task_prefixes() -> Vec<String> {
    strings(&[
        "задание",
        "задания",
        "тапсырма",
        "тапсырмалар",
        "упражнение",
        "жаттығу",
        "task",
        "tasks",
        "assignment",
        "exercise",
    ])
}

fn default_section_prefixes() -> Vec<String> {
    strings(&[
        "критери*",
        "дескриптор*",
        "ответ",
        "ответы",
        "жауап",
        "жауабы",
        "жауаптар",
        "ключ",
        "кілт",
        "этап",
        "этапы",
        "кезең",
        "кезеңдері",
        "интересный факт",
        "қызықты дерек",
        "criteria",
        "criterion",
        "descriptor*",
        "answer",
        "answers",
        "key",
        "stage",
        "stages",
    ])
}

fn default_answer_blank_exclusions() -> Vec<String> {
    strings(&[
        "текст",
        "мәтін",
        "скрипт",
        "сценарий",
        "критери",
        "text",
        "script",
        "criteria",
    ])
}

/// Heuristic phrase lists used by the normalizer and line classifier.
///
/// All entries are matched against the lowercase form of a line, at word
/// starts only.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TextRules {
    /// Fragments marking conversational preamble or meta-commentary.
    #[serde(default = "default_boilerplate")]
    pub boilerplate: Vec<String>,

    /// Lines at or above this many characters are never dropped as boilerplate.
    #[serde(default = "default_short_line_threshold")]
    pub short_line_threshold: usize,

    /// Leading words of task headings (bold, answer-blank candidates).
    /// A trailing `*` matches any word with that stem.
    #[serde(default = "default_task_prefixes")]
    pub task_prefixes: Vec<String>,

    /// Leading words of other section headings (bold only).
    #[serde(default = "default_section_prefixes")]
    pub section_prefixes: Vec<String>,

    /// Task lines mentioning any of these get no answer blank.
    #[serde(default = "default_answer_blank_exclusions")]
    pub answer_blank_exclusions: Vec<String>,
}

impl Default for TextRules {
    fn default() -> Self {
        Self {
            boilerplate: default_boilerplate(),
            short_line_threshold: default_short_line_threshold(),
            task_prefixes: default_task_prefixes(),
            section_prefixes: default_section_prefixes(),
            answer_blank_exclusions: default_answer_blank_exclusions(),
        }
    }
}

impl TextRules {
    /// Whether `line` is short boilerplate that should be dropped.
    #[must_use]
    pub fn is_boilerplate(&self, line: &str) -> bool {
        if line.chars().count() >= self.short_line_threshold {
            return false;
        }
        let lower = line.to_lowercase();
        self.boilerplate
            .iter()
            .any(|fragment| contains_at_word_start(&lower, fragment))
    }

    /// Whether `line` starts with a task prefix.
    #[must_use]
    pub fn is_task(&self, line: &str) -> bool {
        starts_with_any(&line.to_lowercase(), &self.task_prefixes)
    }

    /// Whether `line` starts with a non-task section prefix.
    #[must_use]
    pub fn is_section(&self, line: &str) -> bool {
        starts_with_any(&line.to_lowercase(), &self.section_prefixes)
    }

    /// Whether a task line should be followed by an answer blank.
    #[must_use]
    pub fn wants_answer_blank(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        !self
            .answer_blank_exclusions
            .iter()
            .any(|word| contains_at_word_start(&lower, word))
    }
}

fn starts_with_any(lower: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|p| starts_with_word(lower, p))
}

/// `prefix` is a whole leading word, or a leading stem when it ends in `*`.
fn starts_with_word(lower: &str, prefix: &str) -> bool {
    let (stem, whole_word) = match prefix.strip_suffix('*') {
        Some(stem) => (stem, false),
        None => (prefix, true),
    };
    lower.strip_prefix(stem).is_some_and(|rest| {
        !whole_word || rest.chars().next().is_none_or(|c| !c.is_alphabetic())
    })
}

/// `fragment` occurs where no letter precedes it.
fn contains_at_word_start(lower: &str, fragment: &str) -> bool {
    if fragment.is_empty() {
        return false;
    }
    lower.match_indices(fragment).any(|(at, _)| {
        lower[..at]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphabetic())
    })
}
