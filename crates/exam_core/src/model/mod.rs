//! Domain model for exams and their question lists.
//!
//! # Responsibility
//! - Define the canonical exam record shared by stores and services.
//!
//! # Invariants
//! - An exam name is the lookup key and is never empty.
//! - Exam identifiers are assigned by stores only.

pub mod exam;
