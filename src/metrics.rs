use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Request counters for observability.
/// All metrics are atomic counters for thread-safety
#[derive(Clone, Default, Debug)]
pub struct Metrics {
    /// Learning paths generated for a known class level
    pub paths_generated: Arc<AtomicU64>,
    /// Learning paths refused for an unknown class level
    pub invalid_grade_requests: Arc<AtomicU64>,
    /// Badge reports computed
    pub badge_evaluations: Arc<AtomicU64>,
    /// Quiz attempts appended to the store
    pub attempts_recorded: Arc<AtomicU64>,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub paths_generated: u64,
    pub invalid_grade_requests: u64,
    pub badge_evaluations: u64,
    pub attempts_recorded: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_path(&self) {
        self.paths_generated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_invalid_grade(&self) {
        self.invalid_grade_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_badge_evaluation(&self) {
        self.badge_evaluations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_attempt(&self) {
        self.attempts_recorded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            paths_generated: self.paths_generated.load(Ordering::Relaxed),
            invalid_grade_requests: self.invalid_grade_requests.load(Ordering::Relaxed),
            badge_evaluations: self.badge_evaluations.load(Ordering::Relaxed),
            attempts_recorded: self.attempts_recorded.load(Ordering::Relaxed),
        }
    }
}
