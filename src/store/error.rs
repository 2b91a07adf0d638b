//! Store error types
//!
//! These errors never reach the UI: `load` and `save` map every failure to
//! the fail-open path (empty collection / skipped write). The type exists
//! for backend implementors and for the warn-level log lines.

use thiserror::Error;

/// Errors that can occur in the entry store
#[derive(Error, Debug)]
pub enum StoreError {
    /// The underlying key-value backend failed (e.g. storage unavailable,
    /// quota exceeded)
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// Persisted data could not be serialized or deserialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::Backend("quota exceeded".to_string());
        assert_eq!(err.to_string(), "Storage backend error: quota exceeded");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: StoreError = json_err.into();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
