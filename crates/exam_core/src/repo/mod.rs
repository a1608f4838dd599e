//! Storage contracts consumed by the exam service, plus concrete stores.
//!
//! # Responsibility
//! - Define the exam and question store contracts.
//! - Provide SQLite and in-memory implementations of both.
//!
//! # Invariants
//! - Write paths validate records before persistence.
//! - Stores own identifier assignment; callers never pick ids.

pub mod exam_repo;
pub mod memory;
pub mod question_repo;
