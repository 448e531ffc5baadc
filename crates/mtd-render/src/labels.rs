//! Localized labels for the header, footer, and answer blanks.

use mtd_core::{DocumentKind, Language};

/// Label set for one instruction language.
#[derive(Debug)]
pub struct Labels {
    pub student: &'static str,
    pub subject: &'static str,
    pub grade: &'static str,
    pub date: &'static str,
    pub score: &'static str,
    pub mark: &'static str,
    pub teacher: &'static str,
    pub signature: &'static str,
    pub answer: &'static str,
    pub variant: &'static str,
    worksheet: &'static str,
    summative: &'static str,
    lesson_plan: &'static str,
    test: &'static str,
    inclusion: &'static str,
}

static BILINGUAL: Labels = Labels {
    student: "Оқушы / Ученик",
    subject: "Пән / Предмет",
    grade: "Сынып / Класс",
    date: "Күні / Дата",
    score: "Балл",
    mark: "Баға / Оценка",
    teacher: "Мұғалім / Учитель",
    signature: "қолы / подпись",
    answer: "Жауабы / Ответ",
    variant: "Нұсқа / Вариант",
    worksheet: "Жұмыс парағы / Рабочий лист",
    summative: "БЖБ / СОР",
    lesson_plan: "ҚМЖ / КСП",
    test: "Тест",
    inclusion: "Жеке жұмыс парағы / Индивидуальный лист",
};

static KAZAKH: Labels = Labels {
    student: "Оқушы",
    subject: "Пән",
    grade: "Сынып",
    date: "Күні",
    score: "Балл",
    mark: "Баға",
    teacher: "Мұғалім",
    signature: "қолы",
    answer: "Жауабы",
    variant: "Нұсқа",
    worksheet: "Жұмыс парағы",
    summative: "БЖБ",
    lesson_plan: "ҚМЖ",
    test: "Тест",
    inclusion: "Жеке жұмыс парағы",
};

static RUSSIAN: Labels = Labels {
    student: "Ученик",
    subject: "Предмет",
    grade: "Класс",
    date: "Дата",
    score: "Балл",
    mark: "Оценка",
    teacher: "Учитель",
    signature: "подпись",
    answer: "Ответ",
    variant: "Вариант",
    worksheet: "Рабочий лист",
    summative: "СОР",
    lesson_plan: "КСП",
    test: "Тест",
    inclusion: "Индивидуальный лист",
};

static ENGLISH: Labels = Labels {
    student: "Student",
    subject: "Subject",
    grade: "Grade",
    date: "Date",
    score: "Score",
    mark: "Mark",
    teacher: "Teacher",
    signature: "signature",
    answer: "Answer",
    variant: "Variant",
    worksheet: "Worksheet",
    summative: "Summative assessment",
    lesson_plan: "Short-term plan",
    test: "Test",
    inclusion: "Individual worksheet",
};

impl Labels {
    #[must_use]
    pub const fn for_language(language: Language) -> &'static Self {
        match language {
            Language::Bilingual => &BILINGUAL,
            Language::Kazakh => &KAZAKH,
            Language::Russian => &RUSSIAN,
            Language::English => &ENGLISH,
        }
    }

    /// Header label naming the document kind.
    #[must_use]
    pub const fn kind(&self, kind: DocumentKind) -> &'static str {
        match kind {
            DocumentKind::Worksheet => self.worksheet,
            DocumentKind::Summative => self.summative,
            DocumentKind::LessonPlan => self.lesson_plan,
            DocumentKind::Test => self.test,
            DocumentKind::Inclusion => self.inclusion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bilingual_kind_labels() {
        let labels = Labels::for_language(Language::Bilingual);
        assert_eq!(labels.kind(DocumentKind::Summative), "БЖБ / СОР");
        assert_eq!(labels.kind(DocumentKind::Worksheet), "Жұмыс парағы / Рабочий лист");
    }

    #[test]
    fn every_language_labels_every_kind() {
        for language in [
            Language::Bilingual,
            Language::Kazakh,
            Language::Russian,
            Language::English,
        ] {
            let labels = Labels::for_language(language);
            for kind in DocumentKind::ALL {
                assert!(!labels.kind(kind).is_empty(), "{language}/{kind}");
            }
        }
    }
}
