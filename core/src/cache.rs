//! File-based JSON cache with modification-time expiry.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// JSON file cache.
///
/// The cache is a best-effort layer, not a source of truth: a missing file,
/// a stale file, and an unparseable file all read back as `None`.
#[derive(Debug, Clone)]
pub struct FileCache {
    expiry: Duration,
}

impl FileCache {
    /// A zero `expiry` means entries never go stale.
    pub fn new(expiry: Duration) -> Self {
        Self { expiry }
    }

    /// Reads a cached value, honoring the expiry window.
    pub fn read<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>, CacheError> {
        let metadata = match std::fs::metadata(path) {
            Ok(m) if m.is_file() => m,
            _ => return Ok(None),
        };

        if !self.expiry.is_zero() {
            // A modification time in the future reads as zero age.
            let age = metadata.modified()?.elapsed().unwrap_or_default();
            if age >= self.expiry {
                debug!(path = %path.display(), "cache entry expired");
                return Ok(None);
            }
        }

        let data = std::fs::read_to_string(path)?;
        match serde_json::from_str(&data) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                debug!(path = %path.display(), %err, "discarding unparseable cache entry");
                Ok(None)
            }
        }
    }

    /// Writes a value as compact JSON, creating parent directories as needed.
    pub fn write<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), CacheError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string(value)?)?;
        Ok(())
    }
}
