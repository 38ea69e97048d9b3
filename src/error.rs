//! Error types for the feedback core
//!
//! Structured error definitions using thiserror. Validation errors are the
//! recoverable, user-correctable class; everything else comes from storage,
//! serialization or configuration.

use crate::types::FeedbackId;
use thiserror::Error;

/// Main error type for feedback operations
#[derive(Error, Debug)]
pub enum FeedbackError {
    /// Rating outside the 1..=5 star range
    #[error("Invalid rating: {0} (expected 1 to 5)")]
    InvalidRating(i64),

    /// Author name missing or whitespace only
    #[error("Author name cannot be empty")]
    EmptyAuthorName,

    /// Storage key unusable by the backend
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// Entry was recorded for this session but the durable write failed
    #[error("Feedback {id} was recorded but not persisted: {reason}")]
    NotPersisted { id: FeedbackId, reason: String },

    /// Backend-specific storage failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration source could not be read or merged
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Configuration values failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl FeedbackError {
    /// True for errors the user can fix by correcting the submission
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FeedbackError::InvalidRating(_) | FeedbackError::EmptyAuthorName
        )
    }
}

/// Result type alias for feedback operations
pub type Result<T> = std::result::Result<T, FeedbackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FeedbackError::InvalidRating(7);
        assert_eq!(err.to_string(), "Invalid rating: 7 (expected 1 to 5)");

        let err = FeedbackError::EmptyAuthorName;
        assert_eq!(err.to_string(), "Author name cannot be empty");
    }

    #[test]
    fn test_validation_class() {
        assert!(FeedbackError::InvalidRating(0).is_validation());
        assert!(FeedbackError::EmptyAuthorName.is_validation());
        assert!(!FeedbackError::Storage("disk full".to_string()).is_validation());
        assert!(!FeedbackError::InvalidKey("a/b".to_string()).is_validation());
    }

    #[test]
    fn test_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let err: FeedbackError = parse_err.into();
        assert!(matches!(err, FeedbackError::Serialization(_)));
    }
}
