mod media_normalizer;
mod speech_recognizer;
mod upload_store;

pub use media_normalizer::{MediaNormalizer, NormalizationError};
pub use speech_recognizer::{
    ModelLoader, RecognitionModel, RecognitionResult, RecognizerError, RecognizerSession,
};
pub use upload_store::{UploadStore, UploadStoreError};
