use std::sync::Arc;

use crate::application::ports::{MediaNormalizer, UploadStore};
use crate::application::services::TranscriptionService;

pub struct AppState<S, N>
where
    S: UploadStore + ?Sized,
    N: MediaNormalizer + ?Sized,
{
    pub transcription_service: Arc<TranscriptionService<S, N>>,
    pub max_upload_bytes: usize,
}

impl<S, N> Clone for AppState<S, N>
where
    S: UploadStore + ?Sized,
    N: MediaNormalizer + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}
