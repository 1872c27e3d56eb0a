pub mod definitions;
pub mod rules;

use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::config::engine::EngineConfig;
use crate::progress::model::{timestamp, QuizAttempt};
pub use definitions::{badge_definitions, subject_badge_code, BadgeCategory, BadgeDefinition, BadgeMeta, BadgeRule};

#[derive(Debug, Clone, Copy)]
pub struct BadgeThresholds {
    pub high_score: f64,
    pub subject_mastery: f64,
}

impl Default for BadgeThresholds {
    fn default() -> Self {
        BadgeThresholds {
            high_score: 80.0,
            subject_mastery: 85.0,
        }
    }
}

impl From<&EngineConfig> for BadgeThresholds {
    fn from(config: &EngineConfig) -> Self {
        BadgeThresholds {
            high_score: config.thresholds.high_score,
            subject_mastery: config.thresholds.subject_mastery,
        }
    }
}

/// Outcome of one badge rule for one user.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BadgeStatus {
    pub code: String,
    pub label: String,
    pub description: String,
    pub icon: &'static str,
    pub category: BadgeCategory,
    pub earned: bool,
    /// When the qualifying attempt happened, not when it was evaluated.
    #[serde(serialize_with = "timestamp::option::serialize")]
    pub earned_at: Option<DateTime<Utc>>,
    pub meta: Option<BadgeMeta>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BadgeReport {
    pub user_id: String,
    pub total_badges: usize,
    pub earned_count: usize,
    pub badges: Vec<BadgeStatus>,
}

fn earned_at(rule: &BadgeRule, attempts: &[QuizAttempt], thresholds: &BadgeThresholds) -> Option<DateTime<Utc>> {
    match rule {
        BadgeRule::AttemptCount(n) => rules::nth_attempt(attempts, *n),
        BadgeRule::HighScorer => rules::high_scorer(attempts, thresholds.high_score),
        BadgeRule::PerfectScore => rules::perfect_score(attempts),
        BadgeRule::Consistency => rules::consistency(attempts),
        BadgeRule::SubjectMaster(subject) => {
            rules::subject_master(attempts, subject, thresholds.subject_mastery)
        }
    }
}

/// Evaluate every badge against one user's attempts, in definition order.
pub fn evaluate_badges(attempts: &[QuizAttempt]) -> Vec<BadgeStatus> {
    evaluate_badges_with(attempts, &BadgeThresholds::default())
}

pub fn evaluate_badges_with(attempts: &[QuizAttempt], thresholds: &BadgeThresholds) -> Vec<BadgeStatus> {
    badge_definitions()
        .iter()
        .map(|def| {
            let earned_at = earned_at(&def.rule, attempts, thresholds);
            BadgeStatus {
                code: def.code.clone(),
                label: def.label.clone(),
                description: def.description.clone(),
                icon: def.icon,
                category: def.category,
                earned: earned_at.is_some(),
                earned_at,
                meta: def.meta.clone(),
            }
        })
        .collect()
}

pub fn badge_report(user_id: &str, attempts: &[QuizAttempt], thresholds: &BadgeThresholds) -> BadgeReport {
    let badges = evaluate_badges_with(attempts, thresholds);
    let earned_count = badges.iter().filter(|b| b.earned).count();
    tracing::debug!(
        user_id = %user_id,
        attempts = attempts.len(),
        earned = earned_count,
        "Evaluated badges"
    );
    BadgeReport {
        user_id: user_id.to_string(),
        total_badges: badge_definitions().len(),
        earned_count,
        badges,
    }
}
