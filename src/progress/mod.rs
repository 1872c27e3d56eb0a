pub mod model;
pub mod store;
pub mod summary;

pub use model::{ProgressEntry, QuizAttempt, WatchedContent, WatchedRecord};
