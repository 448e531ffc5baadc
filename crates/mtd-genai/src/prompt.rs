//! Prompt text for a [`GenerationRequest`].
//!
//! Instructions are written in Russian regardless of the output language;
//! the last line tells the model which language(s) to answer in.

use std::fmt::Write as _;

use mtd_core::{DocumentKind, GenerationRequest};

const DESCRIPTOR_HEADER: &str = "| Задание | Дескриптор | Балл |";
const PLAN_HEADER: &str = "| Этап | Деятельность педагога | Деятельность учащихся | Оценивание | Ресурсы |";

/// Builds the prompt for one request.
#[derive(Debug, Clone)]
pub struct PromptBuilder<'a> {
    request: &'a GenerationRequest,
    extra: Vec<String>,
}

impl<'a> PromptBuilder<'a> {
    #[must_use]
    pub const fn new(request: &'a GenerationRequest) -> Self {
        Self {
            request,
            extra: Vec::new(),
        }
    }

    /// Append a free-form instruction after the kind-specific ones.
    #[must_use]
    pub fn instruction(mut self, text: impl Into<String>) -> Self {
        self.extra.push(text.into());
        self
    }

    #[must_use]
    pub fn build(&self) -> String {
        let r = self.request;
        let mut out = String::new();

        let _ = writeln!(out, "{}", role_line(r));
        let _ = writeln!(
            out,
            "Предмет: {}. Тема: {}. Класс: {}.",
            r.subject, r.topic, r.grade
        );
        let _ = writeln!(out, "Цели обучения: {}.", r.goals);
        out.push('\n');

        let mut steps = kind_steps(r);
        if let Some(variant) = r.variant {
            steps.push(format!(
                "Это вариант {variant}: задания должны отличаться от других вариантов при той же сложности."
            ));
        }
        steps.extend(self.extra.iter().cloned());
        steps.push(String::from(
            "Не добавляй вступлений, приветствий и пояснений о себе.",
        ));
        steps.push(String::from("Таблицы оформляй в формате Markdown."));
        steps.push(format!("Пиши на {}.", r.language.prompt_name()));

        for (i, step) in steps.iter().enumerate() {
            let _ = writeln!(out, "{}. {step}", i + 1);
        }

        out.push('\n');
        out.push_str(table_header(r.kind));
        out.push('\n');
        out
    }
}

fn role_line(r: &GenerationRequest) -> String {
    match (r.kind, r.student.as_deref()) {
        (DocumentKind::Inclusion, Some(name)) => format!(
            "Роль: Педагог-наставник / Мотиватор. Целевая аудитория: резервный учащийся {name} (может учиться, но низкая мотивация)."
        ),
        (DocumentKind::Inclusion, None) => String::from(
            "Роль: Педагог-наставник / Мотиватор. Целевая аудитория: резервный учащийся (может учиться, но низкая мотивация).",
        ),
        _ => String::from("Роль: Методист РК."),
    }
}

fn kind_steps(r: &GenerationRequest) -> Vec<String> {
    let max = r.max_score.get();
    let scoring = format!("Принцип: 1 действие = 1 балл. Итоговая сумма баллов: {max}.");
    let descriptors = format!("Таблица дескрипторов на {max} баллов.");

    match r.kind {
        DocumentKind::Worksheet => vec![
            String::from("Создай задания для рабочего листа."),
            scoring,
            descriptors,
        ],
        DocumentKind::Summative => vec![
            String::from("Создай задания суммативного оценивания за раздел (БЖБ / СОР)."),
            String::from("Каждое задание начинай со слова «Задание» и номера."),
            scoring,
            descriptors,
        ],
        DocumentKind::Test => vec![
            String::from("Создай тест: вопросы с четырьмя вариантами ответа A, B, C, D."),
            String::from("Каждый вопрос начинай со слова «Задание» и номера."),
            String::from("В конце дай ключ ответов."),
            scoring,
            descriptors,
        ],
        DocumentKind::LessonPlan => vec![
            String::from("Составь краткосрочный план урока: начало, середина и конец урока."),
            String::from("Для каждого этапа укажи время, деятельность педагога и учащихся, оценивание и ресурсы."),
            String::from("Добавь критерии оценивания и дескрипторы."),
        ],
        DocumentKind::Inclusion => vec![
            String::from("Оставь цели обучения без изменений (уровень сложности соответствует классу)."),
            String::from(
                "Добавь в начало задания «Интересный факт» или «Проблемный вопрос», который зацепит внимание.",
            ),
            String::from("Сделай инструкции более четкими и динамичными."),
            String::from("Используй практические примеры из жизни (зачем это нужно?)."),
            scoring,
            String::from("Выдай текст заданий и таблицу дескрипторов."),
        ],
    }
}

const fn table_header(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::LessonPlan => PLAN_HEADER,
        _ => DESCRIPTOR_HEADER,
    }
}
