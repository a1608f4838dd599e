//! In-memory exam and question stores.
//!
//! # Responsibility
//! - Provide dependency-free stores for tests, demos and local runs.
//!
//! # Invariants
//! - Exams are returned in insertion order.
//! - New exams get `max(existing id, 0) + 1`; an exhausted id space is an
//!   error, never an overflow.
//! - Question lookups without an exam id are rejected, like the SQLite store.

use crate::model::exam::{validate_questions, Exam, ExamId};
use crate::repo::exam_repo::{ExamRepository, RepoError, RepoResult};
use crate::repo::question_repo::QuestionRepository;
use crate::sample::{sample_exams, sample_questions};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Mutex-guarded exam store.
#[derive(Debug, Default)]
pub struct InMemoryExamRepository {
    exams: Mutex<Vec<Exam>>,
}

impl InMemoryExamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with `exams` as-is, ids included.
    pub fn with_exams(exams: Vec<Exam>) -> Self {
        Self {
            exams: Mutex::new(exams),
        }
    }

    /// Seeds the store with [`sample_exams`].
    pub fn with_sample_data() -> Self {
        Self::with_exams(sample_exams())
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, Vec<Exam>>> {
        self.exams
            .lock()
            .map_err(|_| RepoError::LockPoisoned("exam store"))
    }
}

impl ExamRepository for InMemoryExamRepository {
    fn find_all(&self) -> RepoResult<Vec<Exam>> {
        Ok(self.lock()?.clone())
    }

    fn save_exam(&self, exam: &Exam) -> RepoResult<Exam> {
        exam.validate()?;
        let mut exams = self.lock()?;

        match exam.id {
            Some(id) => {
                let slot = exams
                    .iter_mut()
                    .find(|stored| stored.id == Some(id))
                    .ok_or(RepoError::NotFound(id))?;
                *slot = exam.clone();
                Ok(exam.clone())
            }
            None => {
                let max_id = exams
                    .iter()
                    .filter_map(|stored| stored.id)
                    .fold(0, ExamId::max);
                let next_id = max_id.checked_add(1).ok_or_else(|| {
                    RepoError::InvalidData(format!(
                        "exam id {max_id} leaves no room for a new id"
                    ))
                })?;
                let stored = Exam {
                    id: Some(next_id),
                    ..exam.clone()
                };
                exams.push(stored.clone());
                Ok(stored)
            }
        }
    }
}

#[derive(Debug, Default)]
struct QuestionState {
    by_exam: HashMap<ExamId, Vec<String>>,
    bank: Vec<String>,
}

/// Mutex-guarded question store.
#[derive(Debug, Default)]
pub struct InMemoryQuestionRepository {
    state: Mutex<QuestionState>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps every sample exam id to [`sample_questions`].
    pub fn with_sample_data() -> Self {
        let by_exam = sample_exams()
            .into_iter()
            .filter_map(|exam| exam.id)
            .map(|id| (id, sample_questions()))
            .collect();
        Self {
            state: Mutex::new(QuestionState {
                by_exam,
                bank: Vec::new(),
            }),
        }
    }

    /// Replaces the question list served for `exam_id`.
    pub fn set_questions(&self, exam_id: ExamId, questions: Vec<String>) -> RepoResult<()> {
        validate_questions(&questions)?;
        self.lock()?.by_exam.insert(exam_id, questions);
        Ok(())
    }

    /// Returns every text passed to `save_questions`, in call order.
    pub fn saved_questions(&self) -> RepoResult<Vec<String>> {
        Ok(self.lock()?.bank.clone())
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, QuestionState>> {
        self.state
            .lock()
            .map_err(|_| RepoError::LockPoisoned("question store"))
    }
}

impl QuestionRepository for InMemoryQuestionRepository {
    fn find_questions_by_exam_id(&self, exam_id: Option<ExamId>) -> RepoResult<Vec<String>> {
        let exam_id = exam_id.ok_or(RepoError::MissingExamId)?;
        Ok(self
            .lock()?
            .by_exam
            .get(&exam_id)
            .cloned()
            .unwrap_or_default())
    }

    fn save_questions(&self, questions: &[String]) -> RepoResult<()> {
        validate_questions(questions)?;
        self.lock()?.bank.extend_from_slice(questions);
        Ok(())
    }
}
