use serde::Serialize;
use lazy_static::lazy_static;

/// Subjects that each get a mastery badge, in badge order.
pub const MASTERY_SUBJECTS: &[&str] = &["Mathematics", "Science", "English", "Hindi", "Social Studies"];

pub const SUBJECT_MASTER_PREFIX: &str = "subject_master_";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BadgeCategory {
    Milestone,
    Achievement,
    Streak,
    Subject,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BadgeMeta {
    pub subject: String,
}

/// The earn rule behind a badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeRule {
    /// At least `n` attempts; earned at attempt `n` in input order.
    AttemptCount(usize),
    HighScorer,
    PerfectScore,
    Consistency,
    SubjectMaster(String),
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BadgeDefinition {
    pub code: String,
    pub label: String,
    pub description: String,
    pub icon: &'static str,
    pub category: BadgeCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<BadgeMeta>,
    #[serde(skip)]
    pub rule: BadgeRule,
}

fn core(
    code: &str,
    label: &str,
    description: &str,
    icon: &'static str,
    category: BadgeCategory,
    rule: BadgeRule,
) -> BadgeDefinition {
    BadgeDefinition {
        code: code.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        icon,
        category,
        meta: None,
        rule,
    }
}

/// `subject_master_` followed by the lowercased subject with whitespace
/// runs replaced by `_`.
pub fn subject_badge_code(subject: &str) -> String {
    let slug = subject
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("{}{}", SUBJECT_MASTER_PREFIX, slug)
}

fn subject_master(subject: &str) -> BadgeDefinition {
    BadgeDefinition {
        code: subject_badge_code(subject),
        label: format!("{} Master", subject),
        description: format!("Average 85%+ in {} (5+ quizzes)", subject),
        icon: "🏆",
        category: BadgeCategory::Subject,
        meta: Some(BadgeMeta { subject: subject.to_string() }),
        rule: BadgeRule::SubjectMaster(subject.to_string()),
    }
}

fn build_definitions() -> Vec<BadgeDefinition> {
    use BadgeCategory::*;

    let mut defs = vec![
        core("first_quiz", "First Steps", "Completed your first quiz", "🎯", Milestone, BadgeRule::AttemptCount(1)),
        core("quiz_explorer", "Quiz Explorer", "Completed 5 quizzes", "🗺️", Milestone, BadgeRule::AttemptCount(5)),
        core("high_scorer", "High Scorer", "Scored 80%+ in 3 quizzes", "⭐", Achievement, BadgeRule::HighScorer),
        core("consistency", "Consistency Champion", "Completed quizzes for 3 consecutive days", "🔥", Streak, BadgeRule::Consistency),
        core("perfect_score", "Perfect Score", "Achieved 100% in any quiz", "💯", Achievement, BadgeRule::PerfectScore),
        core("quiz_master", "Quiz Master", "Completed 20 quizzes", "👑", Milestone, BadgeRule::AttemptCount(20)),
        core("dedicated_learner", "Dedicated Learner", "Completed 50 quizzes", "📚", Milestone, BadgeRule::AttemptCount(50)),
    ];
    defs.extend(MASTERY_SUBJECTS.iter().map(|s| subject_master(s)));
    defs
}

lazy_static! {
    static ref BADGE_DEFINITIONS: Vec<BadgeDefinition> = build_definitions();
}

/// Every badge, core badges first, then one per mastery subject.
pub fn badge_definitions() -> &'static [BadgeDefinition] {
    &BADGE_DEFINITIONS
}
