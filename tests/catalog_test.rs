use learnpath_lib::curriculum::{load_catalog, Catalog, Difficulty, Topic};
use learnpath_lib::error::CatalogError;

fn topic(id: &str, subject: &str, grade: u32, prereqs: &[&str]) -> Topic {
    Topic {
        id: id.to_string(),
        subject: subject.to_string(),
        grade_level: grade,
        title: format!("Topic {}", id),
        difficulty: Difficulty::Easy,
        prerequisites: prereqs.iter().map(|p| p.to_string()).collect(),
    }
}

#[test]
fn test_builtin_catalog_is_valid() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.validate(), Ok(()));
    assert_eq!(catalog.grade_levels(), vec![6, 7, 8]);

    for level in catalog.grade_levels() {
        let grade = catalog.grade(level).unwrap();
        let subjects: Vec<&str> = grade.subjects.iter().map(|s| s.subject.as_str()).collect();
        assert_eq!(subjects, vec!["Math", "Science", "English"]);
        assert_eq!(grade.total_topics(), 15);
    }
    assert!(catalog.grade(9).is_none());
}

#[test]
fn test_builtin_topics_keep_declared_order() {
    let math = Catalog::builtin().grade(7).unwrap().subjects.iter().find(|s| s.subject == "Math").unwrap();
    let ids: Vec<&str> = math.topics.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["m7_1", "m7_2", "m7_3", "m7_4", "m7_5"]);

    let equations = math.find_by_title("Linear Equations").unwrap();
    assert_eq!(equations.prerequisites, vec!["m7_1".to_string()]);
    assert_eq!(equations.difficulty.label(), "Medium");
    assert_eq!(equations.completion_key(), "Math_Linear Equations");
}

#[test]
fn test_difficulty_tiers() {
    assert_eq!(Difficulty::try_from(1u8), Ok(Difficulty::Easy));
    assert_eq!(Difficulty::try_from(3u8).map(Difficulty::label), Ok("Hard"));
    assert_eq!(Difficulty::try_from(4u8), Err(CatalogError::InvalidDifficulty { tier: 4 }));

    let bad = r#"{"id":"x","subject":"Math","gradeLevel":6,"title":"X","difficulty":0}"#;
    assert!(serde_json::from_str::<Topic>(bad).is_err());
}

#[test]
fn test_unknown_prerequisite_rejected() {
    let result = Catalog::from_topics(vec![
        topic("a", "Math", 6, &[]),
        topic("b", "Math", 6, &["zz"]),
    ]);
    assert_eq!(
        result.unwrap_err(),
        CatalogError::UnknownPrerequisite {
            grade: 6,
            topic: "b".to_string(),
            prerequisite: "zz".to_string(),
        }
    );
}

#[test]
fn test_cross_grade_prerequisite_rejected() {
    let result = Catalog::from_topics(vec![
        topic("a", "Math", 6, &[]),
        topic("b", "Math", 7, &["a"]),
    ]);
    assert!(matches!(result, Err(CatalogError::UnknownPrerequisite { grade: 7, .. })));
}

#[test]
fn test_prerequisite_across_subjects_in_same_grade() {
    let catalog = Catalog::from_topics(vec![
        topic("a", "Math", 6, &[]),
        topic("b", "Science", 6, &["a"]),
    ])
    .unwrap();
    assert_eq!(catalog.grade(6).unwrap().subjects.len(), 2);
}

#[test]
fn test_duplicate_id_rejected() {
    let result = Catalog::from_topics(vec![
        topic("a", "Math", 6, &[]),
        topic("a", "Science", 6, &[]),
    ]);
    assert_eq!(
        result.unwrap_err(),
        CatalogError::DuplicateTopic { grade: 6, id: "a".to_string() }
    );
}

#[tokio::test]
async fn test_load_catalog_from_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let json = r#"[
        {"id":"h1","subject":"Hindi","gradeLevel":5,"title":"Varnamala","difficulty":1},
        {"id":"h2","subject":"Hindi","gradeLevel":5,"title":"Sangya","difficulty":2,"prerequisites":["h1"]}
    ]"#;
    std::fs::write(&path, json).unwrap();

    let catalog = load_catalog(&path).await.unwrap();
    assert_eq!(catalog.grade_levels(), vec![5]);
    let hindi = &catalog.grade(5).unwrap().subjects[0];
    assert_eq!(hindi.topics.len(), 2);
    assert_eq!(hindi.topics[1].difficulty, Difficulty::Medium);
}

#[tokio::test]
async fn test_load_catalog_reports_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, r#"[{"id":"a","subject":"Math","gradeLevel":6,"title":"A","difficulty":1,"prerequisites":["b"]}]"#).unwrap();

    let err = load_catalog(&path).await.unwrap_err();
    assert_eq!(err.stage, "catalog");

    let missing = load_catalog(&dir.path().join("nope.json")).await.unwrap_err();
    assert_eq!(missing.stage, "io");
}
