use std::sync::Arc;

use crate::application::ports::{
    MediaNormalizer, NormalizationError, UploadStore, UploadStoreError,
};
use crate::domain::{LanguageCode, UploadPath, normalized_audio_path};

use super::model_registry::{ModelRegistry, ModelRegistryError};
use super::stream_decoder::{DecodeError, StreamDecoder};

/// Runs one upload through store, normalize, decode and aggregate.
pub struct TranscriptionService<S, N>
where
    S: UploadStore + ?Sized,
    N: MediaNormalizer + ?Sized,
{
    upload_store: Arc<S>,
    normalizer: Arc<N>,
    model_registry: Arc<ModelRegistry>,
    decoder: StreamDecoder,
}

impl<S, N> TranscriptionService<S, N>
where
    S: UploadStore + ?Sized,
    N: MediaNormalizer + ?Sized,
{
    pub fn new(
        upload_store: Arc<S>,
        normalizer: Arc<N>,
        model_registry: Arc<ModelRegistry>,
        decoder: StreamDecoder,
    ) -> Self {
        Self {
            upload_store,
            normalizer,
            model_registry,
            decoder,
        }
    }

    pub fn model_registry(&self) -> &Arc<ModelRegistry> {
        &self.model_registry
    }

    #[tracing::instrument(skip(self, data), fields(upload = %upload_path, language = %language, bytes = data.len()))]
    pub async fn transcribe_upload(
        &self,
        upload_path: &UploadPath,
        language: LanguageCode,
        data: &[u8],
    ) -> Result<String, PipelineError> {
        let input_path = self.upload_store.store(upload_path, data).await?;
        let audio_path = normalized_audio_path(&input_path);

        self.normalizer
            .extract_audio(&input_path, &audio_path)
            .await?;

        if !tokio::fs::try_exists(&audio_path).await.unwrap_or(false) {
            tracing::error!(path = %audio_path.display(), "Normalizer reported success but produced no file");
            return Err(PipelineError::ConvertedAudioMissing);
        }

        let model = self.model_registry.get_model(language).await?;

        let decoder = self.decoder;
        let text = tokio::task::spawn_blocking(move || decoder.transcribe(&audio_path, &*model))
            .await
            .map_err(|e| PipelineError::TaskFailed(e.to_string()))??;

        Ok(text)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Storage(#[from] UploadStoreError),
    #[error(transparent)]
    Normalization(#[from] NormalizationError),
    #[error("Converted audio file not found.")]
    ConvertedAudioMissing,
    #[error(transparent)]
    Model(#[from] ModelRegistryError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("transcription task failed: {0}")]
    TaskFailed(String),
}
