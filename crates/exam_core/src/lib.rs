//! Exam lookup and enrichment core.
//!
//! Finds exams by name in an exam store and attaches question lists from a
//! question store. Both stores sit behind traits; SQLite and in-memory
//! implementations ship with the crate.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod sample;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::exam::{Exam, ExamId, ExamValidationError};
pub use repo::exam_repo::{ExamRepository, RepoError, RepoResult, SqliteExamRepository};
pub use repo::memory::{InMemoryExamRepository, InMemoryQuestionRepository};
pub use repo::question_repo::{QuestionRepository, SqliteQuestionRepository};
pub use service::exam_service::ExamService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
