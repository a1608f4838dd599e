//! Use-case services over the exam and question stores.
//!
//! # Responsibility
//! - Compose store calls into lookup, enrichment and save flows.
//! - Stay storage-agnostic; stores are injected at construction.

pub mod exam_service;
