use async_trait::async_trait;

use crate::error::KeyValueError;

/// Key-value store trait - abstraction over the device storage backend
/// (file-backed, in-memory).
///
/// Every value is an opaque string; callers own the encoding.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `Ok(None)` when the key has never been written.
    async fn get_item(&self, key: &str) -> Result<Option<String>, KeyValueError>;

    /// Write a value, replacing any previous one. A subsequent read sees
    /// either the old or the new value, never a partial one.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), KeyValueError>;

    /// Remove a key. Removing an absent key succeeds.
    async fn remove_item(&self, key: &str) -> Result<(), KeyValueError>;
}
