use std::collections::BTreeSet;
use serde::Serialize;
use crate::curriculum::completion_key;
use crate::ordered::OrderedMap;
use crate::progress::model::{QuizAttempt, WatchedContent};

pub const DEFAULT_WEAK_THRESHOLD: f64 = 60.0;
pub const DEFAULT_PASS_THRESHOLD: f64 = 70.0;

/// A single attempt that scored below the weakness threshold.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeakTopic {
    pub subject: String,
    pub chapter: String,
    pub score: f64,
    /// Every attempt ever made on this (subject, chapter), whatever its score.
    pub attempts: usize,
}

/// Mean score per subject, keyed exactly as the attempts spell the subject,
/// in the order subjects first appear.
pub fn subject_averages(attempts: &[QuizAttempt]) -> OrderedMap<f64> {
    let mut totals: OrderedMap<(f64, usize)> = OrderedMap::new();
    for attempt in attempts {
        match totals.get_mut(&attempt.subject) {
            Some((sum, count)) => {
                *sum += attempt.score;
                *count += 1;
            }
            None => totals.insert(attempt.subject.clone(), (attempt.score, 1)),
        }
    }

    let mut averages = OrderedMap::new();
    for (subject, (sum, count)) in totals.iter() {
        averages.insert(subject.to_string(), sum / *count as f64);
    }
    averages
}

/// One entry per attempt below `threshold`, worst first. Repeated low
/// attempts on a chapter are not merged.
pub fn weak_topics(attempts: &[QuizAttempt], threshold: f64) -> Vec<WeakTopic> {
    let mut weak: Vec<WeakTopic> = attempts
        .iter()
        .filter(|a| a.score < threshold)
        .map(|a| WeakTopic {
            subject: a.subject.clone(),
            chapter: a.chapter.clone(),
            score: a.score,
            attempts: attempts
                .iter()
                .filter(|o| o.subject == a.subject && o.chapter == a.chapter)
                .count(),
        })
        .collect();

    // stable: equal scores keep input order
    weak.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(std::cmp::Ordering::Equal));
    weak
}

/// `subject_chapter` keys with at least one attempt at or above `pass_threshold`.
pub fn completed_topics(attempts: &[QuizAttempt], pass_threshold: f64) -> BTreeSet<String> {
    attempts
        .iter()
        .filter(|a| a.score >= pass_threshold)
        .map(|a| completion_key(&a.subject, &a.chapter))
        .collect()
}

/// Titles of watched content that names a topic.
pub fn watched_topics(watched: &[WatchedContent]) -> BTreeSet<String> {
    watched
        .iter()
        .filter(|w| !w.topic_title.is_empty())
        .map(|w| w.topic_title.clone())
        .collect()
}

/// Every aggregate the recommender needs, derived in one pass over the inputs.
#[derive(Debug, Clone)]
pub struct Performance {
    pub averages: OrderedMap<f64>,
    pub weak: Vec<WeakTopic>,
    pub completed: BTreeSet<String>,
    pub watched: BTreeSet<String>,
}

impl Performance {
    pub fn analyze(
        attempts: &[QuizAttempt],
        watched: &[WatchedContent],
        weak_threshold: f64,
        pass_threshold: f64,
    ) -> Self {
        Performance {
            averages: subject_averages(attempts),
            weak: weak_topics(attempts, weak_threshold),
            completed: completed_topics(attempts, pass_threshold),
            watched: watched_topics(watched),
        }
    }

    /// Subject with the lowest average; the first-seen subject wins ties.
    pub fn focus_subject(&self) -> Option<(&str, f64)> {
        let mut focus: Option<(&str, f64)> = None;
        for (subject, avg) in self.averages.iter() {
            match focus {
                Some((_, best)) if best <= *avg => {}
                _ => focus = Some((subject, *avg)),
            }
        }
        focus
    }
}
