use std::path::Path;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::error::LearnError;
use crate::progress::model::{ProgressEntry, QuizAttempt, WatchedContent, WatchedRecord};

/// Read a JSON array file; a missing file is an empty history.
async fn load_records<T: DeserializeOwned>(path: &Path, what: &str) -> Result<Vec<T>, LearnError> {
    let result = read_records(path, what).await;
    if let Err(ref e) = result {
        tracing::warn!(path = ?path, error = %e, "Failed to load {} records", what);
    }
    result
}

async fn read_records<T: DeserializeOwned>(path: &Path, what: &str) -> Result<Vec<T>, LearnError> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => {
            if content.trim().is_empty() {
                return Ok(Vec::new());
            }
            serde_json::from_str(&content)
                .map_err(|e| LearnError::new(
                    format!("Failed to parse {} file: {}", what, e),
                    "json_parse"
                ).with_context(format!("path: {:?}", path)))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = ?path, "No {} file yet", what);
            Ok(Vec::new())
        }
        Err(e) => Err(LearnError::new(
            format!("Failed to read {} file: {}", what, e),
            "io"
        ).with_context(format!("path: {:?}", path))),
    }
}

/// Overwrite a JSON array file with pretty-printed records.
async fn save_records<T: Serialize>(path: &Path, records: &[T], what: &str) -> Result<(), LearnError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| LearnError::new(
                    format!("Failed to create directory: {}", e),
                    "io"
                ).with_context(format!("path: {:?}", parent)))?;
        }
    }

    let json = serde_json::to_string_pretty(records)
        .map_err(|e| LearnError::new(
            format!("Failed to serialize {} records: {}", what, e),
            "json_serialize"
        ))?;

    tokio::fs::write(path, json)
        .await
        .map_err(|e| LearnError::new(
            format!("Failed to write {} file: {}", what, e),
            "io"
        ).with_context(format!("path: {:?}", path)))?;

    Ok(())
}

/// Load every stored quiz result, in file order.
pub async fn load_progress(path: &Path) -> Result<Vec<ProgressEntry>, LearnError> {
    load_records(path, "progress").await
}

pub async fn save_progress(path: &Path, entries: &[ProgressEntry]) -> Result<(), LearnError> {
    save_records(path, entries, "progress").await
}

pub async fn load_watched(path: &Path) -> Result<Vec<WatchedRecord>, LearnError> {
    load_records(path, "watched").await
}

/// Entries of one user, keeping file order.
pub fn entries_for_user<'a>(entries: &'a [ProgressEntry], user_id: &str) -> Vec<&'a ProgressEntry> {
    entries.iter().filter(|e| e.user_id == user_id).collect()
}

/// Attempt history of one user, keeping file order.
pub fn attempts_for_user(entries: &[ProgressEntry], user_id: &str) -> Vec<QuizAttempt> {
    entries
        .iter()
        .filter(|e| e.user_id == user_id)
        .map(ProgressEntry::to_attempt)
        .collect()
}

pub fn watched_for_user(records: &[WatchedRecord], user_id: &str) -> Vec<WatchedContent> {
    records
        .iter()
        .filter(|r| r.user_id == user_id)
        .map(|r| r.content.clone())
        .collect()
}
