//! Media storage backends
//!
//! Uploaded files are written under a stored filename produced by
//! [`blog_core::text::storage_filename`], so names never contain path
//! separators.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use blog_core::DomainError;
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument, warn};

/// Where uploaded media bytes live
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Persist `bytes` under `filename`; an existing file is never replaced
    async fn put(&self, filename: &str, bytes: &[u8]) -> Result<(), DomainError>;

    /// Remove a stored file; a missing file is not an error
    async fn remove(&self, filename: &str) -> Result<(), DomainError>;
}

/// Stores files in a local directory, created lazily on first write
#[derive(Debug, Clone)]
pub struct LocalMediaStore {
    base_dir: PathBuf,
}

impl LocalMediaStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, filename: &str) -> Result<PathBuf, DomainError> {
        if filename.is_empty() || filename.contains(['/', '\\']) || filename.starts_with("..") {
            return Err(DomainError::StorageError(format!(
                "invalid stored filename: {filename}"
            )));
        }
        Ok(self.base_dir.join(filename))
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn put(&self, filename: &str, bytes: &[u8]) -> Result<(), DomainError> {
        let path = self.path_for(filename)?;

        tokio::fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| {
                DomainError::StorageError(format!(
                    "create {}: {e}",
                    self.base_dir.display()
                ))
            })?;

        let write_err = |e: std::io::Error| {
            DomainError::StorageError(format!("write {}: {e}", path.display()))
        };
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(write_err)?;
        file.write_all(bytes).await.map_err(write_err)?;
        file.flush().await.map_err(write_err)?;

        debug!(path = %path.display(), "Stored media file");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, filename: &str) -> Result<(), DomainError> {
        let path = self.path_for(filename)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "Media file already gone");
                Ok(())
            }
            Err(e) => Err(DomainError::StorageError(format!(
                "remove {}: {e}",
                path.display()
            ))),
        }
    }
}
