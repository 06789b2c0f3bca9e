//! File-per-key string storage.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use jarvis_common::StoreError;

/// A key/value store where each key is a file under the root directory.
/// Keys are restricted to the well-known names this crate exposes, so no
/// path sanitization is needed.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens the store in the platform data dir, creating it if needed.
    pub fn open() -> Result<Self, StoreError> {
        Self::at(crate::paths::data_dir()?)
    }

    /// Opens the store rooted at an explicit directory.
    pub fn at(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|e| StoreError::WriteError {
            path: root.clone(),
            reason: e.to_string(),
        })?;
        info!("storage ready at {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// Reads a key. A missing key is `None`, not an error.
    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StoreError::ReadError {
                path,
                reason: e.to_string(),
            })
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.key_path(key);
        debug!(key, "writing store key");
        std::fs::write(&path, value).map_err(|e| StoreError::WriteError {
            path,
            reason: e.to_string(),
        })
    }

    /// Removes a key. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(());
        }
        std::fs::remove_file(&path).map_err(|e| StoreError::WriteError {
            path,
            reason: e.to_string(),
        })
    }
}
