use chrono::{TimeZone, Utc};
use learnpath_lib::config::engine::EngineConfig;
use learnpath_lib::curriculum::Catalog;
use learnpath_lib::progress::model::{timestamp, ProgressEntry, WatchedRecord};
use learnpath_lib::progress::store;
use learnpath_lib::progress::summary::summarize;
use learnpath_lib::routes::{self, ProgressRequest};
use learnpath_lib::state::app::AppState;
use learnpath_lib::LearningPathResponse;

fn entry(id: &str, user: &str, subject: &str, chapter: &str, score: f64, day: u32) -> ProgressEntry {
    ProgressEntry {
        id: id.to_string(),
        user_id: user.to_string(),
        class_name: "6".to_string(),
        subject: subject.to_string(),
        chapter: chapter.to_string(),
        score,
        correct: 4,
        total: 5,
        quiz_id: None,
        date: Utc.with_ymd_and_hms(2024, 1, day, 10, 0, 0).unwrap().fixed_offset(),
    }
}

fn request(user: &str, subject: &str, chapter: &str, score: f64) -> ProgressRequest {
    ProgressRequest {
        user_id: user.to_string(),
        class_name: "6".to_string(),
        subject: subject.to_string(),
        chapter: chapter.to_string(),
        score,
        correct: 4,
        total: 5,
        quiz_id: Some("q1".to_string()),
    }
}

fn state_in(dir: &std::path::Path) -> AppState {
    let mut config = EngineConfig::default();
    config.storage.data_dir = dir.to_path_buf();
    AppState::with_catalog(config, Catalog::builtin().clone())
}

#[tokio::test]
async fn test_missing_file_is_empty_history() {
    let dir = tempfile::tempdir().unwrap();
    let entries = store::load_progress(&dir.path().join("progress.json")).await.unwrap();
    assert!(entries.is_empty());
    let watched = store::load_watched(&dir.path().join("watched.json")).await.unwrap();
    assert!(watched.is_empty());
}

#[tokio::test]
async fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("progress.json");
    let all = vec![
        entry("1", "u1", "Math", "Integers", 45.0, 1),
        entry("2", "u2", "Science", "Motion", 90.0, 2),
    ];

    store::save_progress(&path, &all).await.unwrap();
    let loaded = store::load_progress(&path).await.unwrap();
    assert_eq!(loaded, all);
    assert_eq!(store::attempts_for_user(&loaded, "u1").len(), 1);
    assert_eq!(store::attempts_for_user(&loaded, "u1")[0].chapter, "Integers");
}

#[tokio::test]
async fn test_corrupt_file_reports_parse_stage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = store::load_progress(&path).await.unwrap_err();
    assert_eq!(err.stage, "json_parse");
}

#[test]
fn test_stored_entry_formats() {
    let json = r#"{
        "id": "1700000000000",
        "userId": "u1",
        "className": "7",
        "subject": "Math",
        "chapter": "Integers",
        "score": 60,
        "correct": 3,
        "total": 5,
        "date": "2024-01-15"
    }"#;
    let parsed: ProgressEntry = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.date, Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
    assert_eq!(parsed.quiz_id, None);

    let out = serde_json::to_value(&parsed).unwrap();
    assert_eq!(out["date"], "2024-01-15T00:00:00.000Z");
    assert_eq!(out["className"], "7");

    let local = timestamp::parse("2024-01-15T08:30:00+05:30").unwrap();
    assert_eq!(local, Utc.with_ymd_and_hms(2024, 1, 15, 3, 0, 0).unwrap());
    assert_eq!(timestamp::format(&local), "2024-01-15T08:30:00.000+05:30");
    assert_eq!(timestamp::parse("yesterday"), None);
}

#[test]
fn test_watched_record_layout() {
    let json = r#"[{"userId":"u1","topic":"Fractions","duration":120,"watched":true}]"#;
    let records: Vec<WatchedRecord> = serde_json::from_str(json).unwrap();
    let content = store::watched_for_user(&records, "u1");
    assert_eq!(content.len(), 1);
    assert_eq!(content[0].topic_title, "Fractions");
    assert_eq!(content[0].duration_seconds, 120);
    assert!(store::watched_for_user(&records, "u2").is_empty());
}

#[test]
fn test_summarize_user_history() {
    let entries = vec![
        entry("1", "u1", "Math", "Integers", 40.0, 1),
        entry("2", "u1", "Science", "Motion", 90.0, 3),
        entry("3", "u1", "Math", "Decimals", 80.0, 2),
    ];
    let refs: Vec<&ProgressEntry> = entries.iter().collect();
    let summary = summarize("u1", &refs);

    assert_eq!(summary.total_quizzes, 3);
    assert!((summary.average_score - 70.0).abs() < 1e-9);
    let weakest = summary.weakest_subject.unwrap();
    assert_eq!(weakest.subject, "Math");
    assert_eq!(weakest.quizzes, 2);
    assert_eq!(summary.last_attempt.unwrap().chapter, "Motion");
    assert_eq!(summary.by_subject.len(), 2);

    let empty = summarize("u2", &[]);
    assert_eq!(empty.total_quizzes, 0);
    assert!(empty.weakest_subject.is_none());
}

#[tokio::test]
async fn test_save_progress_validates() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(dir.path());

    let mut bad = request("u1", "Math", "Integers", 50.0);
    bad.total = 0;
    let err = routes::save_progress(&state, bad).await.unwrap_err();
    assert_eq!(err.stage, "validation");

    let mut bad = request("u1", "Math", "Integers", 50.0);
    bad.correct = 9;
    assert!(routes::save_progress(&state, bad).await.is_err());

    let err = routes::save_progress(&state, request("u1", " ", "Integers", 50.0)).await.unwrap_err();
    assert_eq!(err.context.as_deref(), Some("field: subject"));

    assert!(routes::save_progress(&state, request("u1", "Math", "Integers", 120.0)).await.is_err());

    // zero correct answers is a legitimate result
    let mut zero = request("u1", "Math", "Integers", 0.0);
    zero.correct = 0;
    assert!(routes::save_progress(&state, zero).await.is_ok());
    assert_eq!(state.metrics.snapshot().attempts_recorded, 1);
}

#[tokio::test]
async fn test_save_progress_persists_with_unique_ids() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(dir.path());

    let first = routes::save_progress(&state, request("u1", "Math", "Integers", 45.0)).await.unwrap();
    let second = routes::save_progress(&state, request("u1", "Math", "Whole Numbers", 85.0)).await.unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(second.quiz_id.as_deref(), Some("q1"));

    let on_disk = store::load_progress(&state.config.storage.progress_path()).await.unwrap();
    assert_eq!(on_disk.len(), 2);
    assert_eq!(state.cached_progress().map(|c| c.len()), Some(2));
}

#[tokio::test]
async fn test_route_flow_for_one_user() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(dir.path());

    for (subject, chapter, score) in [
        ("Math", "Integers", 45.0),
        ("Math", "Whole Numbers", 85.0),
        ("Science", "Food and Nutrition", 100.0),
    ] {
        routes::save_progress(&state, request("u1", subject, chapter, score)).await.unwrap();
    }
    routes::save_progress(&state, request("u2", "English", "Grammar Fundamentals", 30.0)).await.unwrap();

    let summary = routes::get_progress_summary(&state, "u1").await.unwrap();
    assert_eq!(summary.total_quizzes, 3);
    assert_eq!(summary.weakest_subject.unwrap().subject, "Math");

    let report = routes::get_badges(&state, "u1").await.unwrap();
    assert_eq!(report.total_badges, report.badges.len());
    let earned: Vec<&str> = report.badges.iter().filter(|b| b.earned).map(|b| b.code.as_str()).collect();
    assert!(earned.contains(&"first_quiz"));
    assert!(earned.contains(&"perfect_score"));
    assert!(!earned.contains(&"quiz_explorer"));

    let response = routes::get_learning_path(&state, "u1", 6).await.unwrap();
    let path = response.path().unwrap();
    assert_eq!(path.progress.completed, 2);
    assert_eq!(path.performance.weak_topics_count, 1);
    assert_eq!(path.performance.focus_area, "Math");

    let invalid = routes::get_learning_path(&state, "u1", 9).await.unwrap();
    assert!(matches!(invalid, LearningPathResponse::Invalid { .. }));

    let snapshot = state.metrics.snapshot();
    assert_eq!(snapshot.paths_generated, 1);
    assert_eq!(snapshot.invalid_grade_requests, 1);
    assert_eq!(snapshot.badge_evaluations, 1);
    assert_eq!(snapshot.attempts_recorded, 4);
}

#[tokio::test]
async fn test_routes_require_user_id() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(dir.path());

    let err = routes::get_badges(&state, "").await.unwrap_err();
    assert_eq!(err.stage, "validation");
    assert!(routes::get_learning_path(&state, "  ", 6).await.is_err());
}

#[test]
fn test_catalog_route() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(dir.path());

    let topics = routes::get_catalog(&state, 8).unwrap();
    assert_eq!(topics.len(), 15);
    assert!(topics.iter().all(|t| t.grade_level == 8));
    assert!(routes::get_catalog(&state, 5).is_err());

    let defs = routes::get_badge_definitions();
    assert_eq!(defs.badges[0].code, "first_quiz");
}
