//! In-memory key-value store - used as fallback when the data directory is
//! unavailable.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use ajuda_core::KeyValueError;
use ajuda_core::ports::KeyValueStore;

/// In-memory key-value store using a HashMap behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryKeyValueStore {
    store: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored keys.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, KeyValueError> {
        let store = self.store.read().await;
        Ok(store.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), KeyValueError> {
        let mut store = self.store.write().await;
        store.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), KeyValueError> {
        let mut store = self.store.write().await;
        store.remove(key);
        Ok(())
    }
}
