//! Domain-level error types.

use thiserror::Error;

/// Snapshot-level errors raised by the post store.
///
/// Callers treat both variants as non-fatal: they are logged and the
/// application keeps running on its in-memory state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The persisted snapshot is malformed or could not be read.
    #[error("Failed to read post snapshot: {0}")]
    Deserialization(String),

    /// The snapshot could not be written.
    #[error("Failed to persist post snapshot: {0}")]
    Persistence(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Deserialization(err.to_string())
    }
}

/// Key-value store errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyValueError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("I/O failed: {0}")]
    Io(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_maps_to_deserialization() {
        let err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let store_err: StoreError = err.into();
        assert!(matches!(store_err, StoreError::Deserialization(_)));
    }
}
