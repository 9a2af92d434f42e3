//! Integration tests for the resume matcher

use resume_matcher::input::InputManager;
use resume_matcher::output::formatter::{JsonFormatter, OutputFormatter};
use resume_matcher::output::report::{MatchReport, ReportStatus};
use resume_matcher::processing::similarity::DocumentSimilarity;
use resume_matcher::{Eligibility, MatchEngine, MatchOutcome, NormalizerMode, Vocabulary};
use std::path::Path;

const RESUMES: [&str; 3] = [
    "tests/fixtures/resume_unrelated.txt",
    "tests/fixtures/resume_typos.md",
    "tests/fixtures/resume_strong.txt",
];

async fn load_fixtures() -> (String, Vec<String>) {
    let manager = InputManager::new();
    let job = manager
        .extract_text(Path::new("tests/fixtures/job_backend.md"))
        .await
        .unwrap();
    let resumes = manager.extract_all(&RESUMES[..]).await.unwrap();
    (job, resumes)
}

#[tokio::test]
async fn test_fixture_ranking() {
    let (job, resumes) = load_fixtures().await;
    let engine = MatchEngine::new(&Vocabulary::default(), NormalizerMode::Linguistic).unwrap();

    let results = engine.match_resumes(Some(&job), &resumes, None).into_results();
    let order: Vec<usize> = results.iter().map(|r| r.resume_index).collect();

    assert_eq!(order, vec![2, 1, 0]);

    let strong = &results[0];
    assert_eq!(strong.match_score, 100.0);
    assert_eq!(strong.eligibility, Eligibility::Eligible);
    assert_eq!(strong.details.years_of_experience, 7);
    assert!(strong.details.matched_skills.contains(&"kubernetes".to_string()));

    let typos = &results[1];
    assert_eq!(typos.eligibility, Eligibility::NotEligible);
    assert!(typos.details.matched_skills.contains(&"python".to_string()));
    assert!(typos.details.matched_skills.contains(&"kubernetes".to_string()));
    assert_eq!(typos.details.experience_match, 60.0);

    let unrelated = &results[2];
    assert!(unrelated.details.matched_skills.is_empty());
    assert_eq!(unrelated.details.years_of_experience, 12);
    assert!(unrelated.details.semantic_score < strong.details.semantic_score);
}

#[tokio::test]
async fn test_fixture_report_json() {
    let (job, resumes) = load_fixtures().await;
    let engine = MatchEngine::new(&Vocabulary::default(), NormalizerMode::Linguistic).unwrap();
    let outcome = engine.match_resumes(Some(&job), &resumes, None);

    let sources: Vec<String> = RESUMES.iter().map(|p| p.to_string()).collect();
    let report = MatchReport::new("job_backend.md".to_string(), outcome, &sources);
    assert_eq!(report.status, ReportStatus::Ranked);
    assert_eq!(report.eligible_count, 1);

    let json = JsonFormatter::new(true).format_report(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["results"].as_array().unwrap().len(), 3);
    assert_eq!(value["results"][0]["source"], "tests/fixtures/resume_strong.txt");
}

#[test]
fn test_whitespace_mode_end_to_end() {
    let engine = MatchEngine::new(&Vocabulary::default(), NormalizerMode::Whitespace).unwrap();
    let resumes = vec![
        "Python developer with 6 years of experience".to_string(),
        "Java developer, 1 year experience".to_string(),
    ];

    let results = engine
        .match_resumes(Some("Senior Python Engineer, 5+ years of experience required"), &resumes, None)
        .into_results();

    assert_eq!(engine.extractor().mode(), NormalizerMode::Whitespace);
    assert_eq!(results[0].resume_index, 0);
    assert!(results[0].details.matched_skills.contains(&"python".to_string()));
    assert_eq!(results[0].details.years_of_experience, 6);
}

#[test]
fn test_empty_inputs_are_not_errors() {
    let engine = MatchEngine::new(&Vocabulary::default(), NormalizerMode::Linguistic).unwrap();
    let resumes = vec!["Python developer".to_string()];

    assert_eq!(engine.match_resumes(Some("Python"), &[], None), MatchOutcome::NoInput);
    assert_eq!(engine.match_resumes(None, &resumes, None), MatchOutcome::NoInput);
    assert!(engine.match_resumes(Some(""), &resumes, None).into_results().is_empty());
}

#[test]
fn test_hundred_resume_batch() {
    let resumes: Vec<String> = (0..100)
        .map(|i| match i % 3 {
            0 => format!("Python and Docker engineer, {} years of experience", i % 10),
            1 => "Retail associate and cashier".to_string(),
            _ => String::new(),
        })
        .collect();

    let stop_words = Vocabulary::default().stop_words().clone();
    let scores = DocumentSimilarity::new(stop_words)
        .unwrap()
        .similarities("Python Docker engineer", &resumes)
        .unwrap();
    assert_eq!(scores.len(), 100);
    assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));

    let engine = MatchEngine::new(&Vocabulary::default(), NormalizerMode::Linguistic).unwrap();
    let results = engine
        .match_resumes(Some("Python Docker engineer"), &resumes, None)
        .into_results();
    assert_eq!(results.len(), 100);
    assert!(results.windows(2).all(|w| w[0].match_score >= w[1].match_score));
}

#[tokio::test]
async fn test_extract_all_preserves_order() {
    let manager = InputManager::new();
    let texts = manager.extract_all(&RESUMES[..]).await.unwrap();

    assert_eq!(texts.len(), RESUMES.len());
    assert!(texts[1].contains("Platform Developer"));
    assert_eq!(
        texts[2],
        manager.extract_text(Path::new(RESUMES[2])).await.unwrap()
    );
}

#[tokio::test]
async fn test_markdown_extraction() {
    let manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/resume_typos.md"))
        .await
        .unwrap();

    assert!(text.contains("Platform Developer"));
    assert!(!text.contains("**"));
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/unsupported.xyz")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/nonexistent.txt")).await;
    assert!(result.is_err());
}
