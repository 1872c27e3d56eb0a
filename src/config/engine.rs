use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use lazy_static::lazy_static;
use crate::analytics::{DEFAULT_PASS_THRESHOLD, DEFAULT_WEAK_THRESHOLD};

/// Score thresholds shared by the analyzer, recommender and badge rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Attempts strictly below this score are weak.
    pub weak: f64,
    /// Attempts at or above this score complete a topic.
    pub pass: f64,
    /// Score counted towards the high scorer badge.
    pub high_score: f64,
    /// Mean score required for a subject master badge.
    pub subject_mastery: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            weak: DEFAULT_WEAK_THRESHOLD,
            pass: DEFAULT_PASS_THRESHOLD,
            high_score: 80.0,
            subject_mastery: 85.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    pub max_per_subject: usize,
    pub next_steps: usize,
    pub estimated_time: String,
}

impl Default for PathSettings {
    fn default() -> Self {
        PathSettings {
            max_per_subject: 3,
            next_steps: 3,
            estimated_time: "2-3 weeks".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub data_dir: PathBuf,
    pub progress_file: String,
    pub watched_file: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            data_dir: PathBuf::from("data"),
            progress_file: "progress.json".to_string(),
            watched_file: "watched.json".to_string(),
        }
    }
}

impl StorageSettings {
    pub fn progress_path(&self) -> PathBuf {
        self.data_dir.join(&self.progress_file)
    }

    pub fn watched_path(&self) -> PathBuf {
        self.data_dir.join(&self.watched_file)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub thresholds: Thresholds,
    pub path: PathSettings,
    pub storage: StorageSettings,
    /// JSON catalog replacing the built-in curriculum.
    pub catalog_path: Option<PathBuf>,
}

fn get_config_path() -> PathBuf {
    std::env::var_os("LEARNPATH_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("learnpath.toml"))
}

/// Load configuration from `path`, falling back to defaults when the file
/// is missing or cannot be parsed.
pub fn load_engine_config(path: &Path) -> EngineConfig {
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str::<EngineConfig>(&content) {
            Ok(config) => {
                tracing::info!(path = ?path, "Loaded engine config");
                config
            }
            Err(e) => {
                tracing::warn!(
                    path = ?path,
                    error = %e,
                    "Failed to parse engine config, using defaults"
                );
                EngineConfig::default()
            }
        },
        Err(e) => {
            tracing::debug!(
                path = ?path,
                error = %e,
                "No engine config found, using defaults"
            );
            EngineConfig::default()
        }
    }
}

lazy_static! {
    static ref ENGINE_CONFIG: EngineConfig = load_engine_config(&get_config_path());
}

/// Get the cached engine configuration (loaded once on first use)
pub fn get_engine_config() -> &'static EngineConfig {
    &ENGINE_CONFIG
}
