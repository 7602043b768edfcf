//! Snapshot persistence for the post list.

use std::sync::Arc;

use crate::domain::PostCollection;
use crate::error::StoreError;
use crate::ports::KeyValueStore;

/// Slot holding the serialized post list.
pub const STORAGE_KEY: &str = "@ajuda_vizinhanca_posts";

/// Loads and saves the whole post list under a single key-value slot.
///
/// Every save replaces the full snapshot; there is no incremental write.
#[derive(Clone)]
pub struct PostStore {
    kv: Arc<dyn KeyValueStore>,
    key: String,
}

impl PostStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(kv, STORAGE_KEY)
    }

    pub fn with_key(kv: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted snapshot. An absent slot yields an empty list.
    pub async fn load(&self) -> Result<PostCollection, StoreError> {
        let raw = self
            .kv
            .get_item(&self.key)
            .await
            .map_err(|e| StoreError::Deserialization(e.to_string()))?;

        let Some(raw) = raw else {
            tracing::debug!(key = %self.key, "No post snapshot found");
            return Ok(PostCollection::new());
        };

        let posts: PostCollection = serde_json::from_str(&raw)?;
        tracing::debug!(key = %self.key, count = posts.len(), "Loaded post snapshot");
        Ok(posts)
    }

    /// Overwrite the snapshot with `posts`.
    pub async fn save(&self, posts: &PostCollection) -> Result<(), StoreError> {
        let raw =
            serde_json::to_string(posts).map_err(|e| StoreError::Persistence(e.to_string()))?;

        self.kv
            .set_item(&self.key, &raw)
            .await
            .map_err(|e| StoreError::Persistence(e.to_string()))?;

        tracing::debug!(key = %self.key, count = posts.len(), "Saved post snapshot");
        Ok(())
    }
}
