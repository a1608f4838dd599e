//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire exam and question stores into `ExamService` outside of tests.
//! - Print enriched lookups for the names given on the command line.
//!
//! Usage: `exam_cli [--db <path>] [--log-dir <abs-dir>] [name...]`
//!
//! Without `--db` the sample data is served from in-memory stores; with it,
//! the SQLite file is seeded on first use.

use exam_core::db::open_db;
use exam_core::sample::{sample_exams, sample_questions};
use exam_core::{
    core_version, default_log_level, init_logging, Exam, ExamRepository, ExamService,
    InMemoryExamRepository, InMemoryQuestionRepository, QuestionRepository, RepoResult,
    SqliteExamRepository, SqliteQuestionRepository,
};
use log::info;
use std::error::Error;
use std::process::ExitCode;

const DEFAULT_LOOKUP: &str = "Matemáticas";

#[derive(Debug, Default)]
struct Options {
    db_path: Option<String>,
    log_dir: Option<String>,
    names: Vec<String>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--db" => {
                options.db_path = Some(args.next().ok_or("--db requires a path")?);
            }
            "--log-dir" => {
                options.log_dir = Some(args.next().ok_or("--log-dir requires a directory")?);
            }
            flag if flag.starts_with("--") => return Err(format!("unknown flag `{flag}`")),
            _ => options.names.push(arg),
        }
    }

    if options.names.is_empty() {
        options.names.push(DEFAULT_LOOKUP.to_string());
    }
    Ok(options)
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("exam_cli: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let options = parse_args(std::env::args().skip(1))?;
    if let Some(log_dir) = options.log_dir.as_deref() {
        init_logging(default_log_level(), log_dir)?;
    }
    println!("exam_core version={}", core_version());

    match options.db_path.as_deref() {
        Some(path) => {
            let conn = open_db(path)?;
            let exams = SqliteExamRepository::try_new(&conn)?;
            let questions = SqliteQuestionRepository::try_new(&conn)?;
            let service = ExamService::new(&exams, questions);
            seed_if_empty(&exams, &service)?;
            print_lookups(&service, &options.names)?;
        }
        None => {
            let service = ExamService::new(
                InMemoryExamRepository::with_sample_data(),
                InMemoryQuestionRepository::with_sample_data(),
            );
            print_lookups(&service, &options.names)?;
        }
    }

    Ok(())
}

/// Saves the sample exams through `service` when `exams` holds none.
///
/// Returns whether seeding happened.
fn seed_if_empty<E: ExamRepository, Q: QuestionRepository>(
    exams: &E,
    service: &ExamService<&E, Q>,
) -> RepoResult<bool> {
    if !exams.find_all()?.is_empty() {
        return Ok(false);
    }
    for exam in sample_exams() {
        service.save_exam(&Exam::new(exam.name).with_questions(sample_questions()))?;
    }
    info!("event=cli_seed module=cli status=ok");
    Ok(true)
}

fn print_lookups<E: ExamRepository, Q: QuestionRepository>(
    service: &ExamService<E, Q>,
    names: &[String],
) -> RepoResult<()> {
    for name in names {
        match service.find_exam_by_name_with_questions(name)? {
            Some(exam) => {
                let id = exam
                    .id
                    .map_or_else(|| "-".to_string(), |id| id.to_string());
                println!("{id}\t{}\t{}", exam.name, exam.questions.join(", "));
            }
            None => println!("-\t{name}\tnot found"),
        }
    }
    Ok(())
}
