use chrono::{DateTime, Duration, NaiveDate, Utc};
use crate::progress::model::QuizAttempt;

pub const HIGH_SCORES_NEEDED: usize = 3;
pub const STREAK_DAYS: usize = 3;
pub const SUBJECT_MASTER_MIN_ATTEMPTS: usize = 5;

fn instant(attempt: &QuizAttempt) -> DateTime<Utc> {
    attempt.date.with_timezone(&Utc)
}

/// Timestamp of the `n`th attempt (1-based) in input order.
pub fn nth_attempt(attempts: &[QuizAttempt], n: usize) -> Option<DateTime<Utc>> {
    if n == 0 {
        return None;
    }
    attempts.get(n - 1).map(instant)
}

/// Timestamp of the third attempt scoring at least `min_score`, input order.
pub fn high_scorer(attempts: &[QuizAttempt], min_score: f64) -> Option<DateTime<Utc>> {
    attempts
        .iter()
        .filter(|a| a.score >= min_score)
        .nth(HIGH_SCORES_NEEDED - 1)
        .map(instant)
}

pub fn perfect_score(attempts: &[QuizAttempt]) -> Option<DateTime<Utc>> {
    attempts.iter().find(|a| a.score == 100.0).map(instant)
}

/// Midnight UTC of the day completing the first run of consecutive active
/// days, scanning the distinct attempt dates in chronological order. A day
/// is the calendar date as written in the attempt's own offset.
pub fn consistency(attempts: &[QuizAttempt]) -> Option<DateTime<Utc>> {
    if attempts.len() < STREAK_DAYS {
        return None;
    }

    let mut days: Vec<NaiveDate> = attempts.iter().map(|a| a.date.date_naive()).collect();
    days.sort();
    days.dedup();

    let mut run = 1;
    for pair in days.windows(2) {
        if pair[1] - pair[0] == Duration::days(1) {
            run += 1;
        } else {
            run = 1;
        }
        if run >= STREAK_DAYS {
            return pair[1].and_hms_opt(0, 0, 0).map(|d| d.and_utc());
        }
    }
    None
}

/// Earned when the subject has enough attempts and their mean reaches
/// `min_average`; stamped with the subject's last attempt in input order.
pub fn subject_master(attempts: &[QuizAttempt], subject: &str, min_average: f64) -> Option<DateTime<Utc>> {
    let subject_attempts: Vec<&QuizAttempt> = attempts.iter().filter(|a| a.subject == subject).collect();
    if subject_attempts.len() < SUBJECT_MASTER_MIN_ATTEMPTS {
        return None;
    }

    let average = subject_attempts.iter().map(|a| a.score).sum::<f64>() / subject_attempts.len() as f64;
    if average >= min_average {
        subject_attempts.last().map(|a| instant(a))
    } else {
        None
    }
}
