use std::sync::Arc;
use parking_lot::RwLock;
use crate::config::engine::EngineConfig;
use crate::curriculum::{self, Catalog};
use crate::error::LearnError;
use crate::metrics::Metrics;
use crate::progress::model::{ProgressEntry, WatchedRecord};

/// Application-wide state container.
/// All mutable state is centralized here and passed explicitly to functions.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<EngineConfig>,
    /// Read-only curriculum, validated before the state is built
    pub catalog: Arc<Catalog>,
    /// In-memory copy of the progress file, loaded on first use
    pub progress: Arc<RwLock<Option<Vec<ProgressEntry>>>>,
    /// In-memory copy of the watched-content file, loaded on first use
    pub watched: Arc<RwLock<Option<Vec<WatchedRecord>>>>,
    /// Serializes read-modify-write cycles on the progress file
    pub write_lock: Arc<tokio::sync::Mutex<()>>,
    pub metrics: Metrics,
}

impl AppState {
    /// Create state over the given catalog.
    pub fn with_catalog(config: EngineConfig, catalog: Catalog) -> Self {
        AppState {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            progress: Arc::new(RwLock::new(None)),
            watched: Arc::new(RwLock::new(None)),
            write_lock: Arc::new(tokio::sync::Mutex::new(())),
            metrics: Metrics::new(),
        }
    }

    /// Create state from configuration, loading the catalog override when
    /// one is configured. The catalog is validated either way.
    pub async fn from_config(config: EngineConfig) -> Result<Self, LearnError> {
        let catalog = match config.catalog_path.as_deref() {
            Some(path) => curriculum::load_catalog(path).await?,
            None => {
                let builtin = Catalog::builtin();
                builtin.validate()?;
                builtin.clone()
            }
        };
        Ok(Self::with_catalog(config, catalog))
    }

    /// Get cached progress entries, if loaded
    pub fn cached_progress(&self) -> Option<Vec<ProgressEntry>> {
        self.progress.read().clone()
    }

    pub fn set_progress(&self, entries: Vec<ProgressEntry>) {
        *self.progress.write() = Some(entries);
    }

    /// Drop the cached progress so the next read goes to disk
    pub fn invalidate_progress(&self) {
        *self.progress.write() = None;
    }

    pub fn cached_watched(&self) -> Option<Vec<WatchedRecord>> {
        self.watched.read().clone()
    }

    pub fn set_watched(&self, records: Vec<WatchedRecord>) {
        *self.watched.write() = Some(records);
    }
}
