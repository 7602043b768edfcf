//! Application state - the controller wired to its store and clock.

use std::sync::Arc;

use ajuda_core::ports::KeyValueStore;
use ajuda_core::{PostListController, PostStore};
use ajuda_infra::{InMemoryKeyValueStore, SystemClock};

#[cfg(feature = "file")]
use ajuda_infra::FileKeyValueStore;

use crate::config::{AppConfig, StorageBackend};

/// Shared application state.
pub struct AppState {
    pub controller: PostListController,
}

impl AppState {
    /// Build the application state with appropriate implementations and
    /// hydrate the post list.
    pub async fn new(config: &AppConfig) -> Self {
        let kv = build_store(config).await;
        let store = PostStore::new(kv);
        let mut controller =
            PostListController::new(store, Arc::new(SystemClock), config.persist_mode);
        controller.initialize().await;

        tracing::info!(
            persist_mode = %controller.mode(),
            posts = controller.get_all().len(),
            "Application state initialized"
        );

        Self { controller }
    }
}

/// Pick the key-value backend, falling back to memory when the data
/// directory is unusable.
pub async fn build_store(config: &AppConfig) -> Arc<dyn KeyValueStore> {
    match config.storage {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory store - posts will not persist");
            Arc::new(InMemoryKeyValueStore::new())
        }
        #[cfg(feature = "file")]
        StorageBackend::File => match FileKeyValueStore::open(&config.data_dir).await {
            Ok(store) => Arc::new(store),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    "Failed to open data directory. Using in-memory fallback."
                );
                Arc::new(InMemoryKeyValueStore::new())
            }
        },
        #[cfg(not(feature = "file"))]
        StorageBackend::File => {
            tracing::warn!("Built without file feature - using in-memory store");
            Arc::new(InMemoryKeyValueStore::new())
        }
    }
}
