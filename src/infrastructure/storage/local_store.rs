use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::application::ports::{UploadStore, UploadStoreError};
use crate::domain::UploadPath;

/// Keeps uploads on the local filesystem under `<base>/<upload-id>/<file-name>`.
pub struct LocalUploadStore {
    base_path: PathBuf,
}

impl LocalUploadStore {
    /// Creates the base directory if needed.
    pub fn new(base_path: PathBuf) -> Result<Self, UploadStoreError> {
        std::fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn locate(&self, path: &UploadPath) -> PathBuf {
        self.base_path.join(path.relative())
    }
}

#[async_trait::async_trait]
impl UploadStore for LocalUploadStore {
    async fn store(&self, path: &UploadPath, data: &[u8]) -> Result<PathBuf, UploadStoreError> {
        let target = self.locate(path);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = tokio::fs::File::create(&target).await?;
        file.write_all(data).await?;
        file.flush().await?;

        tracing::debug!(path = %target.display(), bytes = data.len(), "Upload stored");

        Ok(target)
    }
}
