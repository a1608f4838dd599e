//! Exam domain model.
//!
//! # Responsibility
//! - Define the exam record returned by exam stores and enriched by services.
//! - Provide validation shared by every store write path.
//!
//! # Invariants
//! - `name` is set at construction and treated as the lookup key.
//! - `id` stays `None` until a store persists the exam.
//! - `questions` keeps caller order; it may be empty.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned exam identifier.
pub type ExamId = i64;

/// Validation failures for exam records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExamValidationError {
    /// Name is empty or whitespace-only.
    EmptyName,
    /// Question at `index` is empty or whitespace-only.
    EmptyQuestion { index: usize },
}

impl Display for ExamValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "exam name cannot be empty"),
            Self::EmptyQuestion { index } => {
                write!(f, "question at index {index} cannot be empty")
            }
        }
    }
}

impl Error for ExamValidationError {}

/// Canonical exam record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExamWire")]
pub struct Exam {
    /// Present only after a store has persisted the exam.
    pub id: Option<ExamId>,
    /// Exact-match lookup key.
    pub name: String,
    /// Ordered question texts.
    pub questions: Vec<String>,
}

#[derive(Deserialize)]
struct ExamWire {
    #[serde(default)]
    id: Option<ExamId>,
    name: String,
    #[serde(default)]
    questions: Vec<String>,
}

impl TryFrom<ExamWire> for Exam {
    type Error = ExamValidationError;

    fn try_from(value: ExamWire) -> Result<Self, Self::Error> {
        let exam = Self {
            id: value.id,
            name: value.name,
            questions: value.questions,
        };
        exam.validate()?;
        Ok(exam)
    }
}

impl Exam {
    /// Creates an unsaved exam with no questions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            questions: Vec::new(),
        }
    }

    /// Creates an exam with a known identifier.
    ///
    /// Used by stores and fixtures; services never assign ids.
    pub fn with_id(id: ExamId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            ..Self::new(name)
        }
    }

    /// Replaces the question list, consuming and returning `self`.
    pub fn with_questions<I, S>(mut self, questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.questions = questions.into_iter().map(Into::into).collect();
        self
    }

    /// Returns whether a store has assigned an identifier.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Checks record invariants before persistence.
    pub fn validate(&self) -> Result<(), ExamValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExamValidationError::EmptyName);
        }
        validate_questions(&self.questions)
    }
}

/// Rejects blank question texts, reporting the first offending index.
pub fn validate_questions(questions: &[String]) -> Result<(), ExamValidationError> {
    match questions.iter().position(|text| text.trim().is_empty()) {
        Some(index) => Err(ExamValidationError::EmptyQuestion { index }),
        None => Ok(()),
    }
}
