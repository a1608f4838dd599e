//! Exam lookup and enrichment service.
//!
//! # Responsibility
//! - Find exams by exact name over the full exam set.
//! - Attach question lists to found exams.
//! - Save exams, writing their questions first when there are any.
//!
//! # Invariants
//! - Questions are fetched only for an exam that was found.
//! - The exam id is handed to the question store exactly as stored, even
//!   when absent; rejecting it is the store's call.
//! - Store errors propagate unchanged. No retries, no fallbacks.
//! - The service keeps no state between calls.

use crate::model::exam::Exam;
use crate::repo::exam_repo::{ExamRepository, RepoResult};
use crate::repo::question_repo::QuestionRepository;
use log::debug;

/// Orchestrates an exam store and a question store.
pub struct ExamService<E: ExamRepository, Q: QuestionRepository> {
    exams: E,
    questions: Q,
}

impl<E: ExamRepository, Q: QuestionRepository> ExamService<E, Q> {
    /// Creates a service over the given stores.
    pub fn new(exams: E, questions: Q) -> Self {
        Self { exams, questions }
    }

    /// Returns the first exam whose name equals `name` exactly.
    ///
    /// `Ok(None)` means no exam matched; it is not an error.
    pub fn find_exam_by_name(&self, name: &str) -> RepoResult<Option<Exam>> {
        let found = self
            .exams
            .find_all()?
            .into_iter()
            .find(|exam| exam.name == name);

        debug!(
            "event=exam_lookup module=service status={}",
            if found.is_some() { "ok" } else { "miss" }
        );
        Ok(found)
    }

    /// Looks up an exam by name and replaces its questions with the
    /// question store's list for that exam.
    ///
    /// # Contract
    /// - Returns `Ok(None)` without touching the question store when no
    ///   exam matches.
    /// - The question list is whatever the store returns, empty included.
    /// - A missing exam id is not guarded here; the store's error surfaces.
    pub fn find_exam_by_name_with_questions(&self, name: &str) -> RepoResult<Option<Exam>> {
        let Some(mut exam) = self.find_exam_by_name(name)? else {
            return Ok(None);
        };

        exam.questions = self.questions.find_questions_by_exam_id(exam.id)?;
        debug!(
            "event=exam_enrich module=service status=ok question_count={}",
            exam.questions.len()
        );
        Ok(Some(exam))
    }

    /// Saves `exam`, returning the exam store's result unmodified.
    ///
    /// # Contract
    /// - Non-empty `questions` are sent to the question store once, before
    ///   the exam store call; a failure there skips the exam write.
    /// - Empty `questions` never reach the question store.
    pub fn save_exam(&self, exam: &Exam) -> RepoResult<Exam> {
        if !exam.questions.is_empty() {
            self.questions.save_questions(&exam.questions)?;
        }

        let saved = self.exams.save_exam(exam)?;
        debug!(
            "event=exam_save module=service status=ok question_count={}",
            exam.questions.len()
        );
        Ok(saved)
    }
}
