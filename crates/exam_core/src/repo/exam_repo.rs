//! Exam store contract and SQLite implementation.
//!
//! # Responsibility
//! - Return the complete current exam set without filtering.
//! - Persist new or updated exams and hand back the stored form.
//!
//! # Invariants
//! - `find_all` yields exams in id order with empty question lists.
//! - `save_exam` replaces the exam's question list in the same transaction.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::exam::{Exam, ExamId, ExamValidationError};
use rusqlite::{params, Connection, Transaction};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Error shared by exam and question stores.
#[derive(Debug)]
pub enum RepoError {
    Validation(ExamValidationError),
    Db(DbError),
    NotFound(ExamId),
    /// A question lookup was keyed by an exam that has no identifier.
    MissingExamId,
    /// Stored or store-derived data breaks an invariant.
    InvalidData(String),
    /// An in-memory store's lock was poisoned by a panicking writer.
    LockPoisoned(&'static str),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "exam not found: {id}"),
            Self::MissingExamId => write!(f, "exam id is required to look up questions"),
            Self::InvalidData(message) => write!(f, "invalid stored exam data: {message}"),
            Self::LockPoisoned(store) => write!(f, "{store} lock poisoned"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it with open_db"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ExamValidationError> for RepoError {
    fn from(value: ExamValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Exam storage capability.
pub trait ExamRepository {
    /// Returns every known exam; no filtering, no pagination.
    fn find_all(&self) -> RepoResult<Vec<Exam>>;
    /// Persists `exam` and returns the authoritative stored form.
    fn save_exam(&self, exam: &Exam) -> RepoResult<Exam>;
}

impl<T: ExamRepository + ?Sized> ExamRepository for &T {
    fn find_all(&self) -> RepoResult<Vec<Exam>> {
        (**self).find_all()
    }

    fn save_exam(&self, exam: &Exam) -> RepoResult<Exam> {
        (**self).save_exam(exam)
    }
}

/// SQLite-backed exam store.
pub struct SqliteExamRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteExamRepository<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ExamRepository for SqliteExamRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Exam>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM exams ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut exams = Vec::new();

        while let Some(row) = rows.next()? {
            let id: ExamId = row.get("id")?;
            let name: String = row.get("name")?;
            if name.trim().is_empty() {
                return Err(RepoError::InvalidData(format!(
                    "blank name in exams.name for id {id}"
                )));
            }
            exams.push(Exam::with_id(id, name));
        }

        Ok(exams)
    }

    fn save_exam(&self, exam: &Exam) -> RepoResult<Exam> {
        exam.validate()?;

        let tx = self.conn.unchecked_transaction()?;
        let id = match exam.id {
            Some(id) => {
                let changed = tx.execute(
                    "UPDATE exams SET name = ?1 WHERE id = ?2;",
                    params![exam.name.as_str(), id],
                )?;
                if changed == 0 {
                    return Err(RepoError::NotFound(id));
                }
                id
            }
            None => {
                tx.execute("INSERT INTO exams (name) VALUES (?1);", [exam.name.as_str()])?;
                tx.last_insert_rowid()
            }
        };
        replace_exam_questions(&tx, id, &exam.questions)?;
        tx.commit()?;

        Ok(Exam {
            id: Some(id),
            name: exam.name.clone(),
            questions: exam.questions.clone(),
        })
    }
}

fn replace_exam_questions(
    tx: &Transaction<'_>,
    exam_id: ExamId,
    questions: &[String],
) -> RepoResult<()> {
    tx.execute("DELETE FROM exam_questions WHERE exam_id = ?1;", [exam_id])?;

    let mut stmt =
        tx.prepare("INSERT INTO exam_questions (exam_id, position, text) VALUES (?1, ?2, ?3);")?;
    for (position, text) in questions.iter().enumerate() {
        let position = i64::try_from(position).map_err(|_| {
            RepoError::InvalidData(format!("question position {position} out of range"))
        })?;
        stmt.execute(params![exam_id, position, text.as_str()])?;
    }

    Ok(())
}

/// Rejects connections that have not been migrated to the latest schema.
pub(crate) fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_user_version(conn)?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }
    Ok(())
}
