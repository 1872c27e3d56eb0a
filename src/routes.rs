use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::badges::{self, BadgeDefinition, BadgeReport, BadgeThresholds};
use crate::curriculum::Topic;
use crate::error::LearnError;
use crate::memory::store;
use crate::path::{generate_learning_path_with, LearningPathResponse, PathOptions};
use crate::progress::model::ProgressEntry;
use crate::progress::store::{attempts_for_user, entries_for_user, watched_for_user};
use crate::progress::summary::{summarize, ProgressSummary};
use crate::state::app::AppState;

fn require_user_id(user_id: &str) -> Result<(), LearnError> {
    if user_id.trim().is_empty() {
        return Err(LearnError::new("userId required", "validation"));
    }
    Ok(())
}

/// Personalized learning path for one user at a class level.
pub async fn get_learning_path(
    state: &AppState,
    user_id: &str,
    class_level: u32,
) -> Result<LearningPathResponse, LearnError> {
    require_user_id(user_id)?;

    let entries = store::get_progress(state).await?;
    let attempts = attempts_for_user(&entries, user_id);
    let watched_records = store::get_watched(state).await?;
    let watched = watched_for_user(&watched_records, user_id);

    let response = generate_learning_path_with(
        &state.catalog,
        &attempts,
        &watched,
        class_level,
        &PathOptions::from(state.config.as_ref()),
        Utc::now(),
    );

    if response.is_invalid() {
        state.metrics.record_invalid_grade();
    } else {
        state.metrics.record_path();
    }
    tracing::info!(
        user_id = %user_id,
        class_level = class_level,
        attempts = attempts.len(),
        invalid = response.is_invalid(),
        "Learning path requested"
    );

    Ok(response)
}

/// Every badge with its earned state for one user.
pub async fn get_badges(state: &AppState, user_id: &str) -> Result<BadgeReport, LearnError> {
    require_user_id(user_id)?;

    let entries = store::get_progress(state).await?;
    let attempts = attempts_for_user(&entries, user_id);
    let report = badges::badge_report(
        user_id,
        &attempts,
        &BadgeThresholds::from(state.config.as_ref()),
    );

    state.metrics.record_badge_evaluation();
    Ok(report)
}

#[derive(Serialize, Debug, Clone)]
pub struct BadgeDefinitionsResponse {
    pub badges: &'static [BadgeDefinition],
}

pub fn get_badge_definitions() -> BadgeDefinitionsResponse {
    BadgeDefinitionsResponse {
        badges: badges::badge_definitions(),
    }
}

pub async fn get_progress_summary(state: &AppState, user_id: &str) -> Result<ProgressSummary, LearnError> {
    require_user_id(user_id)?;

    let entries = store::get_progress(state).await?;
    let mine = entries_for_user(&entries, user_id);
    Ok(summarize(user_id, &mine))
}

/// Topics of one class level in catalog order.
pub fn get_catalog(state: &AppState, class_level: u32) -> Result<Vec<Topic>, LearnError> {
    let grade = state.catalog.grade(class_level).ok_or_else(|| {
        LearnError::new(format!("Unknown class level {}", class_level), "validation")
            .with_context(format!("known: {:?}", state.catalog.grade_levels()))
    })?;
    Ok(grade
        .subjects
        .iter()
        .flat_map(|s| s.topics.iter().cloned())
        .collect())
}

/// A finished quiz, as submitted by the scoring flow.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRequest {
    pub user_id: String,
    pub class_name: String,
    pub subject: String,
    pub chapter: String,
    pub score: f64,
    pub correct: u32,
    pub total: u32,
    #[serde(default)]
    pub quiz_id: Option<String>,
}

impl ProgressRequest {
    fn validate(&self) -> Result<(), LearnError> {
        let required = [
            ("userId", &self.user_id),
            ("className", &self.class_name),
            ("subject", &self.subject),
            ("chapter", &self.chapter),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(LearnError::new("Missing required fields", "validation")
                .with_context(format!("field: {}", field)));
        }
        if self.total == 0 {
            return Err(LearnError::new("total must be positive", "validation"));
        }
        if self.correct > self.total {
            return Err(LearnError::new("correct cannot exceed total", "validation")
                .with_context(format!("correct: {}, total: {}", self.correct, self.total)));
        }
        if !(0.0..=100.0).contains(&self.score) {
            return Err(LearnError::new("score must be between 0 and 100", "validation")
                .with_context(format!("score: {}", self.score)));
        }
        Ok(())
    }
}

/// Millisecond timestamp id, bumped past any numeric id already stored.
pub(crate) fn next_entry_id(existing: &[ProgressEntry], now: DateTime<Utc>) -> String {
    let newest = existing
        .iter()
        .filter_map(|e| e.id.parse::<i64>().ok())
        .max()
        .unwrap_or(i64::MIN);
    let millis = now.timestamp_millis();
    let id = if millis > newest { millis } else { newest.saturating_add(1) };
    id.to_string()
}

/// Validate and append a quiz result to the user's history.
pub async fn save_progress(state: &AppState, request: ProgressRequest) -> Result<ProgressEntry, LearnError> {
    request.validate()?;

    let now = Utc::now();
    let entry = store::append_progress(state, |existing| ProgressEntry {
        id: next_entry_id(existing, now),
        user_id: request.user_id.clone(),
        class_name: request.class_name.clone(),
        subject: request.subject.clone(),
        chapter: request.chapter.clone(),
        score: request.score,
        correct: request.correct,
        total: request.total,
        quiz_id: request.quiz_id.clone(),
        date: now.fixed_offset(),
    })
    .await?;

    state.metrics.record_attempt();
    tracing::info!(
        user_id = %entry.user_id,
        subject = %entry.subject,
        chapter = %entry.chapter,
        score = entry.score,
        "Progress recorded"
    );
    Ok(entry)
}
