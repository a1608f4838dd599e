//! Question store contract and SQLite implementation.
//!
//! # Responsibility
//! - Resolve the ordered question list for an exam identifier.
//! - Persist question batches into the shared question bank.
//!
//! # Invariants
//! - A lookup without an exam id is rejected with `RepoError::MissingExamId`.
//! - Saving the same question text twice keeps a single bank row.

use crate::model::exam::{validate_questions, ExamId};
use crate::repo::exam_repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::Connection;

/// Question storage capability.
pub trait QuestionRepository {
    /// Returns the question list for `exam_id`.
    ///
    /// `None` is passed through from callers unchanged; implementations
    /// decide how to reject it.
    fn find_questions_by_exam_id(&self, exam_id: Option<ExamId>) -> RepoResult<Vec<String>>;
    /// Persists a batch of question texts.
    fn save_questions(&self, questions: &[String]) -> RepoResult<()>;
}

impl<T: QuestionRepository + ?Sized> QuestionRepository for &T {
    fn find_questions_by_exam_id(&self, exam_id: Option<ExamId>) -> RepoResult<Vec<String>> {
        (**self).find_questions_by_exam_id(exam_id)
    }

    fn save_questions(&self, questions: &[String]) -> RepoResult<()> {
        (**self).save_questions(questions)
    }
}

/// SQLite-backed question store.
pub struct SqliteQuestionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteQuestionRepository<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }

    /// Returns every banked question text, oldest first.
    pub fn list_bank(&self) -> RepoResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT text FROM questions ORDER BY id ASC;")?;
        let texts = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(texts)
    }
}

impl QuestionRepository for SqliteQuestionRepository<'_> {
    fn find_questions_by_exam_id(&self, exam_id: Option<ExamId>) -> RepoResult<Vec<String>> {
        let exam_id = exam_id.ok_or(RepoError::MissingExamId)?;

        let mut stmt = self.conn.prepare(
            "SELECT text
             FROM exam_questions
             WHERE exam_id = ?1
             ORDER BY position ASC;",
        )?;
        let texts = stmt
            .query_map([exam_id], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(texts)
    }

    fn save_questions(&self, questions: &[String]) -> RepoResult<()> {
        validate_questions(questions)?;

        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare("INSERT OR IGNORE INTO questions (text) VALUES (?1);")?;
            for text in questions {
                stmt.execute([text.as_str()])?;
            }
        }
        tx.commit()?;

        Ok(())
    }
}
