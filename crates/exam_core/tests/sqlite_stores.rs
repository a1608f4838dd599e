use exam_core::db::open_db_in_memory;
use exam_core::sample::{sample_exams, sample_questions};
use exam_core::{
    Exam, ExamRepository, ExamService, ExamValidationError, QuestionRepository, RepoError,
    SqliteExamRepository, SqliteQuestionRepository,
};
use rusqlite::Connection;

fn seed(repo: &SqliteExamRepository<'_>) {
    for exam in sample_exams() {
        repo.save_exam(&Exam::new(exam.name).with_questions(sample_questions()))
            .unwrap();
    }
}

#[test]
fn save_assigns_ids_and_find_all_keeps_insert_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteExamRepository::try_new(&conn).unwrap();
    seed(&repo);

    let exams = repo.find_all().unwrap();
    let expected: Vec<_> = sample_exams()
        .into_iter()
        .map(|exam| (exam.id, exam.name))
        .collect();
    let actual: Vec<_> = exams.iter().map(|exam| (exam.id, exam.name.clone())).collect();
    assert_eq!(actual, expected);
    assert!(exams.iter().all(|exam| exam.questions.is_empty()));
}

#[test]
fn save_returns_stored_form() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteExamRepository::try_new(&conn).unwrap();

    let saved = repo
        .save_exam(&Exam::new("Física").with_questions(["q1", "q2"]))
        .unwrap();
    assert_eq!(saved.id, Some(1));
    assert_eq!(saved.name, "Física");
    assert_eq!(saved.questions, vec!["q1".to_string(), "q2".to_string()]);
}

#[test]
fn update_replaces_name_and_question_list() {
    let conn = open_db_in_memory().unwrap();
    let exams = SqliteExamRepository::try_new(&conn).unwrap();
    let questions = SqliteQuestionRepository::try_new(&conn).unwrap();

    let mut saved = exams
        .save_exam(&Exam::new("Física").with_questions(["q1", "q2", "q3"]))
        .unwrap();
    saved.name = "Física II".to_string();
    saved.questions = vec!["q9".to_string()];
    exams.save_exam(&saved).unwrap();

    assert_eq!(exams.find_all().unwrap()[0].name, "Física II");
    assert_eq!(
        questions.find_questions_by_exam_id(saved.id).unwrap(),
        vec!["q9".to_string()]
    );
}

#[test]
fn update_unknown_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteExamRepository::try_new(&conn).unwrap();

    let err = repo.save_exam(&Exam::with_id(42, "Física")).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(42)));
}

#[test]
fn validation_failure_blocks_writes() {
    let conn = open_db_in_memory().unwrap();
    let exams = SqliteExamRepository::try_new(&conn).unwrap();
    let questions = SqliteQuestionRepository::try_new(&conn).unwrap();

    let err = exams.save_exam(&Exam::new(" ")).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ExamValidationError::EmptyName)
    ));

    let err = questions
        .save_questions(&["ok".to_string(), String::new()])
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ExamValidationError::EmptyQuestion { index: 1 })
    ));
    assert!(questions.list_bank().unwrap().is_empty());
    assert!(exams.find_all().unwrap().is_empty());
}

#[test]
fn question_lookup_requires_exam_id() {
    let conn = open_db_in_memory().unwrap();
    let questions = SqliteQuestionRepository::try_new(&conn).unwrap();

    let err = questions.find_questions_by_exam_id(None).unwrap_err();
    assert!(matches!(err, RepoError::MissingExamId));
    assert!(questions.find_questions_by_exam_id(Some(5)).unwrap().is_empty());
}

#[test]
fn question_bank_deduplicates_texts() {
    let conn = open_db_in_memory().unwrap();
    let questions = SqliteQuestionRepository::try_new(&conn).unwrap();

    questions
        .save_questions(&["q1".to_string(), "q2".to_string()])
        .unwrap();
    questions
        .save_questions(&["q2".to_string(), "q3".to_string()])
        .unwrap();

    assert_eq!(
        questions.list_bank().unwrap(),
        vec!["q1".to_string(), "q2".to_string(), "q3".to_string()]
    );
}

#[test]
fn stores_reject_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteExamRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
    assert!(SqliteQuestionRepository::try_new(&conn).is_err());
}

#[test]
fn service_round_trip_over_sqlite() {
    let conn = open_db_in_memory().unwrap();
    let exams = SqliteExamRepository::try_new(&conn).unwrap();
    let questions = SqliteQuestionRepository::try_new(&conn).unwrap();
    let service = ExamService::new(&exams, &questions);

    let saved = service
        .save_exam(&Exam::new("Física").with_questions(["q1", "q2"]))
        .unwrap();
    assert_eq!(saved.id, Some(1));

    let plain = service.find_exam_by_name("Física").unwrap().unwrap();
    assert!(plain.questions.is_empty());

    let enriched = service
        .find_exam_by_name_with_questions("Física")
        .unwrap()
        .unwrap();
    assert_eq!(enriched.id, Some(1));
    assert_eq!(enriched.questions, vec!["q1".to_string(), "q2".to_string()]);
    assert_eq!(
        questions.list_bank().unwrap(),
        vec!["q1".to_string(), "q2".to_string()]
    );

    assert!(service
        .find_exam_by_name_with_questions("Química")
        .unwrap()
        .is_none());
}
