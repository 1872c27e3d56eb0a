use crate::error::LearnError;
use crate::progress::model::{ProgressEntry, WatchedRecord};
use crate::progress::store as progress_store;
use crate::state::app::AppState;

/// Get all progress entries from AppState, loading from disk if not cached
pub async fn get_progress(state: &AppState) -> Result<Vec<ProgressEntry>, LearnError> {
    if let Some(entries) = state.cached_progress() {
        return Ok(entries);
    }

    let entries = progress_store::load_progress(&state.config.storage.progress_path()).await?;
    state.set_progress(entries.clone());
    Ok(entries)
}

/// Get all watched-content records, loading from disk if not cached
pub async fn get_watched(state: &AppState) -> Result<Vec<WatchedRecord>, LearnError> {
    if let Some(records) = state.cached_watched() {
        return Ok(records);
    }

    let records = progress_store::load_watched(&state.config.storage.watched_path()).await?;
    state.set_watched(records.clone());
    Ok(records)
}

/// Append an entry built from the current history, persist it and refresh
/// the cache. The whole read-modify-write runs under the state's write lock.
pub async fn append_progress<F>(state: &AppState, build: F) -> Result<ProgressEntry, LearnError>
where
    F: FnOnce(&[ProgressEntry]) -> ProgressEntry,
{
    let _guard = state.write_lock.lock().await;
    let path = state.config.storage.progress_path();

    let mut entries = progress_store::load_progress(&path).await?;
    let entry = build(&entries);
    entries.push(entry.clone());

    if let Err(e) = progress_store::save_progress(&path, &entries).await {
        state.invalidate_progress();
        return Err(e);
    }

    state.set_progress(entries);
    Ok(entry)
}
