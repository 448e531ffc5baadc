//! The per-invocation generation request and its validated fields.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{DocumentKind, Language};
use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Grade
// ---------------------------------------------------------------------------

/// School grade, `1..=11` in the Kazakhstani system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Grade(u8);

impl Grade {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 11;

    /// Build a grade, rejecting values outside `1..=11`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when `value` is out of range.
    pub fn new(value: u8) -> Result<Self, CoreError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::Validation(format!(
                "grade must be between {} and {}, got {value}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Grade {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> Self {
        grade.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// MaxScore
// ---------------------------------------------------------------------------

/// Maximum achievable score of a document. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MaxScore(u32);

impl MaxScore {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when `value` is zero.
    pub fn new(value: u32) -> Result<Self, CoreError> {
        if value == 0 {
            return Err(CoreError::Validation(
                "max score must be a positive integer".to_string(),
            ));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for MaxScore {
    fn default() -> Self {
        Self(10)
    }
}

impl TryFrom<u32> for MaxScore {
    type Error = CoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MaxScore> for u32 {
    fn from(score: MaxScore) -> Self {
        score.0
    }
}

impl fmt::Display for MaxScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// GenerationRequest
// ---------------------------------------------------------------------------

/// Everything needed to prompt the model and render the resulting document.
///
/// Built once per invocation, consumed by the prompt builder and the renderer,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GenerationRequest {
    pub subject: String,
    #[schemars(with = "u8")]
    pub grade: Grade,
    pub topic: String,
    /// Learning goals (curriculum codes and free text).
    pub goals: String,
    #[schemars(with = "u32")]
    pub max_score: MaxScore,
    #[serde(default)]
    pub kind: DocumentKind,
    /// Student name, only for individualized variants.
    #[serde(default)]
    pub student: Option<String>,
    /// Variant number when several parallel versions are produced.
    #[serde(default)]
    pub variant: Option<u32>,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub teacher: String,
}

impl GenerationRequest {
    /// Check the free-text fields and drop blank optional values.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if subject, topic, or goals are blank.
    pub fn validate(mut self) -> Result<Self, CoreError> {
        for (field, value) in [
            ("subject", &self.subject),
            ("topic", &self.topic),
            ("goals", &self.goals),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::Validation(format!("{field} must not be empty")));
            }
        }

        self.student = self
            .student
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
        if self.variant == Some(0) {
            self.variant = None;
        }
        Ok(self)
    }

    /// Document title as shown above the body (before upper-casing).
    #[must_use]
    pub fn title(&self) -> String {
        match (&self.student, self.kind.is_individual()) {
            (Some(name), true) => format!("{} ({name})", self.topic.trim()),
            _ => self.topic.trim().to_string(),
        }
    }
}
