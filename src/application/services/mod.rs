mod model_registry;
mod stream_decoder;
mod transcription_service;

pub use model_registry::{ModelRegistry, ModelRegistryError};
pub use stream_decoder::{
    CANONICAL_SAMPLE_RATE, DEFAULT_CHUNK_FRAMES, DecodeError, MAX_CHUNK_FRAMES, StreamDecoder,
    open_canonical_wav,
};
pub use transcription_service::{PipelineError, TranscriptionService};
