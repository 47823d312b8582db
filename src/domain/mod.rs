mod language_code;
mod transcript;
mod upload_path;

pub use language_code::LanguageCode;
pub use transcript::{Transcript, TranscriptFragment};
pub use upload_path::{UploadId, UploadPath, normalized_audio_path, temp_audio_path};
