mod ffmpeg_normalizer;
mod recognizer_factory;
mod scripted_recognizer;
mod unavailable_recognizer;
#[cfg(feature = "vosk")]
mod vosk_recognizer;

pub use ffmpeg_normalizer::{DEFAULT_TRANSCODER, FfmpegNormalizer, check_ffmpeg_binary};
pub use recognizer_factory::{ModelLoaderFactory, RecognizerProvider};
pub use scripted_recognizer::{ScriptedModel, ScriptedModelLoader};
pub use unavailable_recognizer::UnavailableModelLoader;
#[cfg(feature = "vosk")]
pub use vosk_recognizer::{VoskModel, VoskModelLoader};
