//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use ajuda_core::PersistMode;

const DEFAULT_DATA_DIR: &str = "./data";

/// Backing store for the post snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub storage: StorageBackend,
    pub persist_mode: PersistMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            storage: StorageBackend::default(),
            persist_mode: PersistMode::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`. Unknown values fall back to the
    /// default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup("AJUDA_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let storage = match lookup("AJUDA_STORAGE").map(|v| v.trim().to_lowercase()) {
            None => StorageBackend::default(),
            Some(v) if v == "file" => StorageBackend::File,
            Some(v) if v == "memory" => StorageBackend::Memory,
            Some(other) => {
                tracing::warn!(value = %other, "Unknown AJUDA_STORAGE, using file");
                StorageBackend::default()
            }
        };

        let persist_mode = match lookup("AJUDA_PERSIST_MODE") {
            None => PersistMode::default(),
            Some(raw) => raw.parse::<PersistMode>().unwrap_or_else(|e: String| {
                tracing::warn!(error = %e, "Invalid AJUDA_PERSIST_MODE, using best-effort");
                PersistMode::default()
            }),
        };

        Self {
            data_dir,
            storage,
            persist_mode,
        }
    }
}
