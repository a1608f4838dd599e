//! Static sample datasets.
//!
//! Used to seed in-memory stores, the CLI smoke run and tests.

use crate::model::exam::Exam;

const SAMPLE_EXAM_NAMES: [&str; 6] = [
    "Matemáticas",
    "Lenguaje",
    "Historia",
    "Personal Social",
    "Ciencia y Ambiente",
    "Religión",
];

const SAMPLE_QUESTIONS: [&str; 6] = [
    "aritmética",
    "integrales",
    "derivadas",
    "trigonometría",
    "geometría",
    "álgebra",
];

/// Six exams with ids `1..=6`.
pub fn sample_exams() -> Vec<Exam> {
    SAMPLE_EXAM_NAMES
        .iter()
        .zip(1..)
        .map(|(name, id)| Exam::with_id(id, *name))
        .collect()
}

/// Same exams with ids `-1..=-5`; the last one has no id.
pub fn sample_exams_with_negative_ids() -> Vec<Exam> {
    let last = SAMPLE_EXAM_NAMES.len() - 1;
    SAMPLE_EXAM_NAMES
        .iter()
        .zip(1..)
        .enumerate()
        .map(|(index, (name, id))| {
            if index == last {
                Exam::new(*name)
            } else {
                Exam::with_id(-id, *name)
            }
        })
        .collect()
}

/// Same exams, none persisted.
pub fn sample_exams_without_ids() -> Vec<Exam> {
    SAMPLE_EXAM_NAMES.iter().map(|name| Exam::new(*name)).collect()
}

pub fn sample_questions() -> Vec<String> {
    SAMPLE_QUESTIONS.iter().map(|text| text.to_string()).collect()
}

/// An unsaved exam used by save flows.
pub fn sample_new_exam() -> Exam {
    Exam::new("Física")
}
