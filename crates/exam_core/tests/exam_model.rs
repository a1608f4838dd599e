use exam_core::{Exam, ExamValidationError};

#[test]
fn with_id_and_questions_build_persisted_exam() {
    let exam = Exam::with_id(3, "Historia").with_questions(["q1", "q2"]);

    assert_eq!(exam.id, Some(3));
    assert!(exam.is_persisted());
    assert_eq!(exam.name, "Historia");
    assert_eq!(exam.questions, vec!["q1".to_string(), "q2".to_string()]);
}

#[test]
fn validate_rejects_blank_name() {
    assert_eq!(
        Exam::new("   ").validate(),
        Err(ExamValidationError::EmptyName)
    );
    assert_eq!(Exam::new("Física").validate(), Ok(()));
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let exam = Exam::with_id(7, "Física").with_questions(["q1"]);

    let json = serde_json::to_value(&exam).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["name"], "Física");
    assert_eq!(json["questions"], serde_json::json!(["q1"]));

    let decoded: Exam = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, exam);
}

#[test]
fn deserialize_defaults_missing_id_and_questions() {
    let decoded: Exam = serde_json::from_value(serde_json::json!({ "name": "Física" })).unwrap();

    assert_eq!(decoded, Exam::new("Física"));
}

#[test]
fn deserialize_rejects_blank_question() {
    let value = serde_json::json!({
        "id": null,
        "name": "Física",
        "questions": ["q1", ""]
    });

    let err = serde_json::from_value::<Exam>(value).unwrap_err();
    assert!(
        err.to_string().contains("question at index 1 cannot be empty"),
        "unexpected error: {err}"
    );
}
