use std::path::Path;
use std::sync::Arc;

/// Loads a language model from its on-disk directory.
pub trait ModelLoader: Send + Sync {
    fn load(&self, model_dir: &Path) -> Result<Arc<dyn RecognitionModel>, RecognizerError>;
}

/// A loaded, read-only model shared by every request for its language.
pub trait RecognitionModel: Send + Sync {
    fn new_session(&self, sample_rate: f32) -> Result<Box<dyn RecognizerSession>, RecognizerError>;
}

/// Streaming decode context for a single audio stream.
pub trait RecognizerSession: Send {
    /// Feeds 16-bit mono samples. Returns `true` when the engine reached a
    /// finalized result boundary and `result` holds the completed segment.
    fn accept_waveform(&mut self, samples: &[i16]) -> Result<bool, RecognizerError>;

    fn result(&mut self) -> RecognitionResult;

    fn partial_result(&mut self) -> RecognitionResult;

    /// Flushes buffered audio and returns whatever the engine still holds.
    fn final_result(&mut self) -> RecognitionResult;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecognitionResult {
    pub text: Option<String>,
}

impl RecognitionResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn empty() -> Self {
        Self { text: None }
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RecognizerError {
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
    #[error("recognizer session failed: {0}")]
    SessionFailed(String),
    #[error("waveform rejected: {0}")]
    WaveformRejected(String),
}
