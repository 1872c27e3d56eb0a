#[cfg(test)]
mod tests {
    use crate::error::{CatalogError, LearnError};

    #[test]
    fn test_error_creation() {
        let error = LearnError::new("Test error", "test_stage");
        assert_eq!(error.message, "Test error");
        assert_eq!(error.stage, "test_stage");
        assert!(error.context.is_none());
    }

    #[test]
    fn test_error_with_context() {
        let error = LearnError::new("Test error", "test_stage")
            .with_context("Additional context");
        assert!(error.context.is_some());
        assert_eq!(error.context.unwrap(), "Additional context");
    }

    #[test]
    fn test_error_display() {
        let error = LearnError::new("Test error", "test_stage")
            .with_context("context")
            .with_source("source");
        let display = format!("{}", error);
        assert_eq!(display, "[test_stage] Test error (context: context) (source: source)");
    }

    #[test]
    fn test_catalog_error_converts() {
        let error: LearnError = CatalogError::UnknownPrerequisite {
            grade: 6,
            topic: "m6_2".to_string(),
            prerequisite: "m5_1".to_string(),
        }
        .into();
        assert_eq!(error.stage, "catalog");
        assert!(error.message.contains("m5_1"));
    }
}
