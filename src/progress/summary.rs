use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use crate::progress::model::{timestamp, ProgressEntry};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectStats {
    pub subject: String,
    pub avg_score: f64,
    pub quizzes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LastAttempt {
    pub class: String,
    pub subject: String,
    pub chapter: String,
    pub score: f64,
    #[serde(serialize_with = "timestamp::serialize")]
    pub date: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub user_id: String,
    pub total_quizzes: usize,
    pub average_score: f64,
    pub weakest_subject: Option<SubjectStats>,
    pub last_attempt: Option<LastAttempt>,
    pub by_subject: Vec<SubjectStats>,
}

/// Summarize one user's stored results. `entries` must already be filtered
/// to that user.
pub fn summarize(user_id: &str, entries: &[&ProgressEntry]) -> ProgressSummary {
    if entries.is_empty() {
        return ProgressSummary {
            user_id: user_id.to_string(),
            total_quizzes: 0,
            average_score: 0.0,
            weakest_subject: None,
            last_attempt: None,
            by_subject: Vec::new(),
        };
    }

    let total_quizzes = entries.len();
    let average_score = entries.iter().map(|e| e.score).sum::<f64>() / total_quizzes as f64;

    // (subject, score sum, count) in first-seen order
    let mut grouped: Vec<(String, f64, usize)> = Vec::new();
    for entry in entries {
        match grouped.iter_mut().find(|(s, _, _)| *s == entry.subject) {
            Some((_, sum, count)) => {
                *sum += entry.score;
                *count += 1;
            }
            None => grouped.push((entry.subject.clone(), entry.score, 1)),
        }
    }

    let by_subject: Vec<SubjectStats> = grouped
        .into_iter()
        .map(|(subject, sum, count)| SubjectStats {
            subject,
            avg_score: sum / count as f64,
            quizzes: count,
        })
        .collect();

    let weakest_subject = by_subject
        .iter()
        .fold(None::<&SubjectStats>, |min, s| match min {
            Some(m) if m.avg_score <= s.avg_score => Some(m),
            _ => Some(s),
        })
        .cloned();

    let last_attempt = entries
        .iter()
        .fold(None::<&ProgressEntry>, |latest, e| match latest {
            Some(l) if l.date >= e.date => Some(l),
            _ => Some(*e),
        })
        .map(|e| LastAttempt {
            class: e.class_name.clone(),
            subject: e.subject.clone(),
            chapter: e.chapter.clone(),
            score: e.score,
            date: e.date,
        });

    ProgressSummary {
        user_id: user_id.to_string(),
        total_quizzes,
        average_score,
        weakest_subject,
        last_attempt,
        by_subject,
    }
}
