pub mod analytics;
pub mod badges;
pub mod config;
pub mod curriculum;
pub mod error;
pub mod logging;
pub mod memory;
pub mod metrics;
pub mod ordered;
pub mod path;
pub mod progress;
pub mod routes;
pub mod state;

#[cfg(test)]
#[path = "../tests/unit/error_handling_test.rs"]
mod error_handling_test;
#[cfg(test)]
#[path = "../tests/unit/ordered_map_test.rs"]
mod ordered_map_test;
#[cfg(test)]
#[path = "../tests/unit/recommendation_test.rs"]
mod recommendation_test;
#[cfg(test)]
#[path = "../tests/unit/entry_id_test.rs"]
mod entry_id_test;

pub use analytics::{completed_topics, subject_averages, watched_topics, weak_topics, WeakTopic};
pub use badges::{evaluate_badges, BadgeStatus};
pub use curriculum::{Catalog, Difficulty, Topic};
pub use error::{CatalogError, LearnError};
pub use path::{generate_learning_path, LearningPath, LearningPathResponse};
pub use progress::{QuizAttempt, WatchedContent};
