//! Integration tests for the resume screener

use resume_screener::config::Config;
use resume_screener::error::ResumeScreenerError;
use resume_screener::input::manager::InputManager;
use resume_screener::output::formatter::{save_report_to_file, JsonFormatter, OutputFormatter};
use resume_screener::output::report::ScreeningReport;
use resume_screener::processing::engine::ScreeningEngine;
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Python"));
    assert!(text.contains("PostgreSQL"));
}

#[tokio::test]
async fn test_markdown_extracted_as_plain_text() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Maria Garcia"));
    assert!(text.contains("Docker"));
    // Markdown is read verbatim, not rendered
    assert!(text.contains("## Skills"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_caching_disabled_by_config() {
    let mut config = Config::default();
    config.input.enable_caching = false;

    let mut manager = InputManager::from_config(&config.input);
    let path = Path::new("tests/fixtures/sample_resume.txt");

    manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_word_document_reports_decoding_failure() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/legacy_resume.doc");

    match manager.extract_text(path).await {
        Err(ResumeScreenerError::TextExtraction(msg)) => {
            assert!(msg.contains("Word document"));
        }
        other => panic!("expected a text extraction error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_end_to_end_screening_pipeline() {
    let mut manager = InputManager::new();
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let requirements_text = manager
        .extract_text(Path::new("tests/fixtures/sample_requirements.txt"))
        .await
        .unwrap();

    let mut engine = ScreeningEngine::with_seed(&Config::default(), 7).unwrap();
    engine.update_requirements(&requirements_text);
    let outcome = engine.screen(&resume_text);

    assert_eq!(outcome.profile.name, "John Doe");
    assert_eq!(outcome.profile.email, "john.doe@example.com");

    assert!(outcome.match_result.score > 0.5);
    assert!(outcome.match_result.score <= 1.0);
    assert!(outcome.match_result.matched_skills.contains("python"));
    assert!(outcome.match_result.matched_skills.contains("react"));
    assert!(outcome.match_result.matched_skills.contains("docker"));
    assert!(outcome.match_result.missing_skills.contains("kubernetes"));

    assert!(!outcome.interview_plan.technical_questions.is_empty());
    assert!(!outcome.interview_plan.behavioral_questions.is_empty());
    assert!(outcome.interview_plan.technical_questions.len() <= 5);
}

#[tokio::test]
async fn test_undecodable_resume_screens_as_default_profile() {
    let mut manager = InputManager::new();
    let requirements_text = manager
        .extract_text(Path::new("tests/fixtures/sample_requirements.txt"))
        .await
        .unwrap();

    // The legacy document cannot be decoded; the pipeline continues with
    // empty text instead of aborting.
    let resume_text = match manager
        .extract_text(Path::new("tests/fixtures/legacy_resume.doc"))
        .await
    {
        Err(ResumeScreenerError::TextExtraction(_))
        | Err(ResumeScreenerError::PdfExtraction(_)) => String::new(),
        other => panic!("expected a decoding failure, got {:?}", other),
    };

    let mut engine = ScreeningEngine::with_seed(&Config::default(), 7).unwrap();
    engine.update_requirements(&requirements_text);
    let outcome = engine.screen(&resume_text);

    assert_eq!(outcome.profile.name, "Unknown");
    assert_eq!(outcome.match_result.score, 0.0);
    assert!(outcome.match_result.matched_skills.is_empty());
    assert_eq!(
        outcome.interview_plan.format.name,
        "Skills Assessment + Learning Potential"
    );
}

#[tokio::test]
async fn test_report_persists_to_nested_path() {
    let mut manager = InputManager::new();
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let requirements_text = manager
        .extract_text(Path::new("tests/fixtures/sample_requirements.txt"))
        .await
        .unwrap();

    let mut engine = ScreeningEngine::with_seed(&Config::default(), 7).unwrap();
    engine.update_requirements(&requirements_text);
    let outcome = engine.screen(&resume_text);

    let report = ScreeningReport::new(outcome, "sample_resume.txt", "sample_requirements.txt", 8);
    let json = JsonFormatter::new().format_report(&report).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("reports").join("out.json");
    save_report_to_file(&json, &target).unwrap();

    let written = std::fs::read_to_string(&target).unwrap();
    let parsed: ScreeningReport = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed.metadata.resume_file, "sample_resume.txt");
    assert_eq!(
        parsed.summary.score_percentage,
        report.summary.score_percentage
    );
}
