//! Error types for the checklist model.

use thiserror::Error;

/// Result type alias using `ChecklistError`.
pub type Result<T> = std::result::Result<T, ChecklistError>;

/// Errors raised by checklist operations.
#[derive(Error, Debug)]
pub enum ChecklistError {
    /// Toggle requested for an index outside the definition.
    #[error("Milestone index {index} out of range (checklist has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Persisted storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[source] serde_json::Error),
}

/// Errors raised by a `KeyValueStore` backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backend is not reachable (no window, storage disabled, quota exceeded).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Key cannot be mapped onto the backend.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// State could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_error_message() {
        let err = ChecklistError::IndexOutOfRange { index: 9, len: 8 };
        assert_eq!(
            err.to_string(),
            "Milestone index 9 out of range (checklist has 8 items)"
        );
    }

    #[test]
    fn test_storage_error_converts() {
        let err: ChecklistError = StorageError::Unavailable("no window".to_string()).into();
        assert!(matches!(err, ChecklistError::Storage(StorageError::Unavailable(_))));
        assert_eq!(err.to_string(), "Storage error: Storage unavailable: no window");
    }
}
