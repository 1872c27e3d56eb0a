pub mod recommendation;

use std::collections::BTreeSet;
use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::analytics::{Performance, DEFAULT_PASS_THRESHOLD, DEFAULT_WEAK_THRESHOLD};
use crate::config::engine::EngineConfig;
use crate::curriculum::{Catalog, SubjectTopics, Topic};
use crate::ordered::OrderedMap;
use crate::progress::model::{timestamp, QuizAttempt, WatchedContent};
use recommendation::{Reason, Recommendation};

pub use recommendation::{PRIORITY_NEXT, PRIORITY_UNEXPLORED, PRIORITY_WEAK};

pub const NO_FOCUS: &str = "None";
pub const ENCOURAGEMENT: &str = "Keep up the great work!";

#[derive(Debug, Clone)]
pub struct PathOptions {
    pub weak_threshold: f64,
    pub pass_threshold: f64,
    pub max_per_subject: usize,
    pub next_steps: usize,
    pub estimated_time: String,
}

impl Default for PathOptions {
    fn default() -> Self {
        PathOptions {
            weak_threshold: DEFAULT_WEAK_THRESHOLD,
            pass_threshold: DEFAULT_PASS_THRESHOLD,
            max_per_subject: 3,
            next_steps: 3,
            estimated_time: "2-3 weeks".to_string(),
        }
    }
}

impl From<&EngineConfig> for PathOptions {
    fn from(config: &EngineConfig) -> Self {
        PathOptions {
            weak_threshold: config.thresholds.weak,
            pass_threshold: config.thresholds.pass,
            max_per_subject: config.path.max_per_subject,
            next_steps: config.path.next_steps,
            estimated_time: config.path.estimated_time.clone(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProgressOverview {
    pub completed: usize,
    pub total: usize,
    pub percentage: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceOverview {
    pub subject_averages: OrderedMap<f64>,
    pub weak_topics_count: usize,
    pub focus_area: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PathSummary {
    pub next_steps: Vec<Recommendation>,
    pub estimated_time: String,
    pub recommendation: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub class_level: u32,
    #[serde(serialize_with = "timestamp::serialize")]
    pub generated_at: DateTime<Utc>,
    pub progress: ProgressOverview,
    pub performance: PerformanceOverview,
    /// Recommendations per subject, in catalog subject order.
    pub learning_path: OrderedMap<Vec<Recommendation>>,
    pub summary: PathSummary,
}

/// Either a learning path or the invalid-grade error value.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum LearningPathResponse {
    Path(LearningPath),
    Invalid { error: String },
}

impl LearningPathResponse {
    pub fn path(&self) -> Option<&LearningPath> {
        match self {
            LearningPathResponse::Path(p) => Some(p),
            LearningPathResponse::Invalid { .. } => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, LearningPathResponse::Invalid { .. })
    }
}

/// JavaScript-style rounding: halves go up.
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

fn describe_levels(levels: &[u32]) -> String {
    let names: Vec<String> = levels.iter().map(|l| l.to_string()).collect();
    match names.len() {
        0 => String::new(),
        1 => names[0].clone(),
        2 => format!("{} or {}", names[0], names[1]),
        n => format!("{}, or {}", names[..n - 1].join(", "), names[n - 1]),
    }
}

fn invalid_grade(catalog: &Catalog) -> LearningPathResponse {
    LearningPathResponse::Invalid {
        error: format!(
            "Invalid class level. Must be {}.",
            describe_levels(&catalog.grade_levels())
        ),
    }
}

/// Every prerequisite id must itself be in the completed set. The set holds
/// `subject_title` keys, so ids only match a catalog that keys its topics
/// that way; with the built-in catalog, topics with prerequisites stay locked.
fn prerequisites_met(topic: &Topic, completed: &BTreeSet<String>) -> bool {
    topic.prerequisites.iter().all(|id| completed.contains(id))
}

fn subject_path(
    subject: &SubjectTopics,
    attempts: &[QuizAttempt],
    perf: &Performance,
    opts: &PathOptions,
) -> Vec<Recommendation> {
    let mut recs: Vec<Recommendation> = Vec::new();

    // Remediation: the worst weak attempt of this subject only.
    if let Some(weak) = perf.weak.iter().find(|w| w.subject == subject.subject) {
        match subject.find_by_title(&weak.chapter) {
            Some(topic) => recs.push(Recommendation::new(
                topic,
                Reason::NeedsImprovement(weak.score),
                weak.score,
            )),
            None => tracing::debug!(
                subject = %subject.subject,
                chapter = %weak.chapter,
                "Weak chapter has no catalog topic, skipping"
            ),
        }
    }

    // Progression in declared order.
    for topic in &subject.topics {
        if recs.len() >= opts.max_per_subject {
            break;
        }
        if recs.iter().any(|r| r.topic_id == topic.id) {
            continue;
        }
        if perf.completed.contains(&topic.completion_key()) {
            continue;
        }
        if !prerequisites_met(topic, &perf.completed) {
            continue;
        }

        let score = attempts
            .iter()
            .find(|a| a.subject == subject.subject && a.chapter == topic.title)
            .map(|a| a.score)
            .unwrap_or(0.0);
        let reason = if perf.watched.contains(&topic.title) {
            Reason::NextInCurriculum
        } else {
            Reason::NotYetExplored
        };
        recs.push(Recommendation::new(topic, reason, score));
    }

    // stable sort keeps declaration order among equal priorities
    recs.sort_by(|a, b| b.priority.cmp(&a.priority));
    recs.truncate(opts.max_per_subject);
    recs
}

/// Build a learning path with default options, stamped with the current time.
pub fn generate_learning_path(
    catalog: &Catalog,
    attempts: &[QuizAttempt],
    watched: &[WatchedContent],
    class_level: u32,
) -> LearningPathResponse {
    generate_learning_path_with(
        catalog,
        attempts,
        watched,
        class_level,
        &PathOptions::default(),
        Utc::now(),
    )
}

/// Build a learning path. Output depends only on the arguments.
pub fn generate_learning_path_with(
    catalog: &Catalog,
    attempts: &[QuizAttempt],
    watched: &[WatchedContent],
    class_level: u32,
    opts: &PathOptions,
    generated_at: DateTime<Utc>,
) -> LearningPathResponse {
    let grade = match catalog.grade(class_level) {
        Some(grade) => grade,
        None => {
            tracing::warn!(class_level = class_level, "Learning path requested for unknown class level");
            return invalid_grade(catalog);
        }
    };

    let perf = Performance::analyze(attempts, watched, opts.weak_threshold, opts.pass_threshold);

    let mut learning_path = OrderedMap::new();
    for subject in &grade.subjects {
        let recs = subject_path(subject, attempts, &perf, opts);
        learning_path.insert(subject.subject.clone(), recs);
    }

    let total = grade.total_topics();
    let completed = perf.completed.len();
    let percentage = if total == 0 {
        0
    } else {
        round_half_up(completed as f64 / total as f64 * 100.0) as u32
    };

    let focus = perf.focus_subject();
    let focus_area = focus
        .map(|(subject, _)| subject.to_string())
        .unwrap_or_else(|| NO_FOCUS.to_string());
    let recommendation = match focus {
        Some((subject, avg)) => format!("Focus on {} ({}% average)", subject, round_half_up(avg)),
        None => ENCOURAGEMENT.to_string(),
    };

    let next_steps: Vec<Recommendation> = learning_path
        .values()
        .flat_map(|recs| recs.iter())
        .take(opts.next_steps)
        .cloned()
        .collect();

    tracing::debug!(
        class_level = class_level,
        attempts = attempts.len(),
        completed = completed,
        weak = perf.weak.len(),
        focus = %focus_area,
        "Generated learning path"
    );

    LearningPathResponse::Path(LearningPath {
        class_level,
        generated_at,
        progress: ProgressOverview {
            completed,
            total,
            percentage,
        },
        performance: PerformanceOverview {
            subject_averages: perf.averages.clone(),
            weak_topics_count: perf.weak.len(),
            focus_area,
        },
        learning_path,
        summary: PathSummary {
            next_steps,
            estimated_time: opts.estimated_time.clone(),
            recommendation,
        },
    })
}
