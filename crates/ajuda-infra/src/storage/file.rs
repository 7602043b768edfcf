//! File-backed key-value store - one file per key under a data directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use ajuda_core::KeyValueError;
use ajuda_core::ports::KeyValueStore;

const FILE_SUFFIX: &str = ".json";
const TEMP_SUFFIX: &str = ".tmp";

/// Durable device store.
///
/// Writes go to a temporary sibling file that is then renamed over the
/// target, so readers observe either the previous or the new value.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Open (and create if needed) the data directory.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, KeyValueError> {
        let root = root.into();
        fs::create_dir_all(&root).await.map_err(|e| {
            KeyValueError::Unavailable(format!(
                "Failed to create data directory '{}': {}",
                root.display(),
                e
            ))
        })?;

        tracing::info!(path = %root.display(), "Opened file key-value store");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, KeyValueError> {
        Ok(self.root.join(encode_key(key)?))
    }
}

/// Map a key to a portable file name: ASCII alphanumerics, `_` and `-` are
/// kept, every other byte becomes `%XX`. Dots are encoded too, so no key can
/// name `.`, `..` or a temporary file.
pub fn encode_key(key: &str) -> Result<String, KeyValueError> {
    if key.is_empty() {
        return Err(KeyValueError::InvalidKey("key must not be empty".to_string()));
    }

    let mut name = String::with_capacity(key.len() + FILE_SUFFIX.len());
    for byte in key.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'-' => name.push(byte as char),
            _ => name.push_str(&format!("%{byte:02X}")),
        }
    }
    name.push_str(FILE_SUFFIX);
    Ok(name)
}

/// Write `value` and flush it to disk before returning, so a later rename
/// never points at data that only lived in the page cache.
async fn write_synced(path: &Path, value: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(value.as_bytes()).await?;
    file.sync_all().await
}

#[cfg(unix)]
async fn sync_dir(dir: &Path) -> std::io::Result<()> {
    fs::File::open(dir).await?.sync_all().await
}

#[cfg(not(unix))]
async fn sync_dir(_dir: &Path) -> std::io::Result<()> {
    Ok(())
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, KeyValueError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KeyValueError::Io(format!(
                "Failed to read '{}': {}",
                path.display(),
                e
            ))),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), KeyValueError> {
        let path = self.path_for(key)?;
        let mut temp = path.clone().into_os_string();
        temp.push(TEMP_SUFFIX);
        let temp = PathBuf::from(temp);

        if let Err(e) = write_synced(&temp, value).await {
            let _ = fs::remove_file(&temp).await;
            return Err(KeyValueError::Io(format!(
                "Failed to write '{}': {}",
                temp.display(),
                e
            )));
        }

        if let Err(e) = fs::rename(&temp, &path).await {
            let _ = fs::remove_file(&temp).await;
            return Err(KeyValueError::Io(format!(
                "Failed to rename '{}' to '{}': {}",
                temp.display(),
                path.display(),
                e
            )));
        }

        // The rename itself lives in the directory entry.
        sync_dir(&self.root).await.map_err(|e| {
            KeyValueError::Io(format!(
                "Failed to sync directory '{}': {}",
                self.root.display(),
                e
            ))
        })?;

        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), KeyValueError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(KeyValueError::Io(format!(
                "Failed to remove '{}': {}",
                path.display(),
                e
            ))),
        }
    }
}
