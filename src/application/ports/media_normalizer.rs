use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// Converts arbitrary media into mono, 16 kHz, 16-bit PCM wave audio.
#[async_trait]
pub trait MediaNormalizer: Send + Sync {
    async fn extract_audio(&self, input: &Path, output: &Path) -> Result<(), NormalizationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NormalizationError {
    #[error("Input file '{}' not found.", .0.display())]
    InputNotFound(PathBuf),
    #[error("transcoder '{binary}' could not be started: {reason}")]
    TranscoderUnavailable { binary: String, reason: String },
    #[error("FFmpeg error: {0}")]
    ConversionFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
