use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};

/// Timestamps keep the offset they were written with, so the calendar date
/// of an attempt is the one in its own string. UTC values are written as
/// `YYYY-MM-DDTHH:MM:SS.mmmZ`, others with their `+hh:mm` offset. Reading
/// accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS` (UTC) or a bare date
/// (midnight UTC).
pub mod timestamp {
    use super::*;
    use std::fmt::Display;
    use serde::{Deserializer, Serializer};

    pub fn format<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        ts.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn parse(raw: &str) -> Option<DateTime<FixedOffset>> {
        let raw = raw.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts);
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(naive.and_utc().fixed_offset());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc().fixed_offset())
    }

    pub fn serialize<Tz, S>(ts: &DateTime<Tz>, serializer: S) -> Result<S::Ok, S::Error>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
        S: Serializer,
    {
        serializer.serialize_str(&format(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{}'", raw)))
    }

    pub mod option {
        use super::*;

        pub fn serialize<Tz, S>(ts: &Option<DateTime<Tz>>, serializer: S) -> Result<S::Ok, S::Error>
        where
            Tz: TimeZone,
            Tz::Offset: Display,
            S: Serializer,
        {
            match ts {
                Some(ts) => serializer.serialize_some(&format(ts)),
                None => serializer.serialize_none(),
            }
        }
    }
}

/// One completed quiz attempt, as consumed by the analyzer and badge rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub subject: String,
    /// Matches a catalog topic's title.
    #[serde(alias = "chapterTitle")]
    pub chapter: String,
    pub score: f64,
    #[serde(default)]
    pub correct: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(with = "timestamp", alias = "timestamp")]
    pub date: DateTime<FixedOffset>,
}

impl QuizAttempt {
    pub fn new<S, C, D>(subject: S, chapter: C, score: f64, date: D) -> Self
    where
        S: Into<String>,
        C: Into<String>,
        D: Into<DateTime<FixedOffset>>,
    {
        QuizAttempt {
            subject: subject.into(),
            chapter: chapter.into(),
            score,
            correct: 0,
            total: 0,
            date: date.into(),
        }
    }

    pub fn with_counts(mut self, correct: u32, total: u32) -> Self {
        self.correct = correct;
        self.total = total;
        self
    }
}

/// Instructional material a user viewed, joined to topics by title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WatchedContent {
    #[serde(rename = "topic", default)]
    pub topic_title: String,
    #[serde(rename = "duration", default)]
    pub duration_seconds: u64,
    #[serde(default)]
    pub watched: bool,
}

impl WatchedContent {
    pub fn new<S: Into<String>>(topic_title: S) -> Self {
        WatchedContent {
            topic_title: topic_title.into(),
            duration_seconds: 0,
            watched: true,
        }
    }
}

/// Watched-content record as stored in the flat file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchedRecord {
    pub user_id: String,
    #[serde(flatten)]
    pub content: WatchedContent,
}

/// Quiz result as stored in `progress.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub id: String,
    pub user_id: String,
    pub class_name: String,
    pub subject: String,
    pub chapter: String,
    pub score: f64,
    pub correct: u32,
    pub total: u32,
    #[serde(default)]
    pub quiz_id: Option<String>,
    #[serde(with = "timestamp")]
    pub date: DateTime<FixedOffset>,
}

impl ProgressEntry {
    pub fn to_attempt(&self) -> QuizAttempt {
        QuizAttempt {
            subject: self.subject.clone(),
            chapter: self.chapter.clone(),
            score: self.score,
            correct: self.correct,
            total: self.total,
            date: self.date,
        }
    }
}
