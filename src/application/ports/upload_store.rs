use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::UploadPath;

/// Working storage for raw uploads and the audio derived from them.
#[async_trait]
pub trait UploadStore: Send + Sync {
    /// Writes the bytes, replacing any existing file, and returns where they landed.
    async fn store(&self, path: &UploadPath, data: &[u8]) -> Result<PathBuf, UploadStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UploadStoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
