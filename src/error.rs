use serde::{Serialize, Deserialize};
use std::fmt;

/// Unified error type for the learning path crate.
/// Fallible operations return Result<T, LearnError> instead of String errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearnError {
    pub message: String,
    pub stage: String,
    pub context: Option<String>,
    pub source: Option<String>,
}

impl LearnError {
    /// Create a new error with stage and message
    pub fn new<S: Into<String>>(message: S, stage: &'static str) -> Self {
        LearnError {
            message: message.into(),
            stage: stage.to_string(),
            context: None,
            source: None,
        }
    }

    /// Add additional context information
    pub fn with_context<S: Into<String>>(mut self, context: S) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add source error information
    pub fn with_source<S: Into<String>>(mut self, source: S) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for LearnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.stage, self.message)?;
        if let Some(ref context) = self.context {
            write!(f, " (context: {})", context)?;
        }
        if let Some(ref source) = self.source {
            write!(f, " (source: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for LearnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

/// Integrity violations found while validating a curriculum catalog.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("grade {grade} has no subjects")]
    EmptyGrade { grade: u32 },

    #[error("duplicate topic id '{id}' in grade {grade}")]
    DuplicateTopic { grade: u32, id: String },

    #[error("topic '{topic}' in grade {grade} requires unknown topic '{prerequisite}'")]
    UnknownPrerequisite {
        grade: u32,
        topic: String,
        prerequisite: String,
    },

    #[error("difficulty tier {tier} is outside 1..=3")]
    InvalidDifficulty { tier: u8 },
}

impl From<CatalogError> for LearnError {
    fn from(err: CatalogError) -> Self {
        LearnError::new(
            err.to_string(),
            "catalog"
        ).with_source("catalog_validation")
    }
}
