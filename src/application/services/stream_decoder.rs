use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use hound::{SampleFormat, WavReader};

use crate::application::ports::{RecognitionModel, RecognizerError};
use crate::domain::{Transcript, TranscriptFragment};

pub const DEFAULT_CHUNK_FRAMES: usize = 4000;
/// One minute of canonical audio.
pub const MAX_CHUNK_FRAMES: usize = 960_000;
pub const CANONICAL_SAMPLE_RATE: u32 = 16_000;

/// Feeds a wave stream to a recognizer session in fixed-size frame chunks.
#[derive(Debug, Clone, Copy)]
pub struct StreamDecoder {
    chunk_frames: usize,
}

impl Default for StreamDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_FRAMES)
    }
}

impl StreamDecoder {
    pub fn new(chunk_frames: usize) -> Self {
        Self {
            chunk_frames: chunk_frames.clamp(1, MAX_CHUNK_FRAMES),
        }
    }

    pub fn chunk_frames(&self) -> usize {
        self.chunk_frames
    }

    /// Decodes a canonical wave file and returns the aggregated transcript text.
    pub fn transcribe(
        &self,
        audio_path: &Path,
        model: &dyn RecognitionModel,
    ) -> Result<String, DecodeError> {
        let reader = open_canonical_wav(audio_path)?;
        let transcript = self.decode(reader, model)?;

        let text = transcript.text();
        if text.is_empty() {
            return Err(DecodeError::EmptyTranscription);
        }

        tracing::info!(
            fragments = transcript.fragments().len(),
            chars = text.len(),
            "Audio transcription completed"
        );

        Ok(text)
    }

    pub fn decode<R: Read>(
        &self,
        mut reader: WavReader<R>,
        model: &dyn RecognitionModel,
    ) -> Result<Transcript, DecodeError> {
        let spec = reader.spec();
        let mut session = model.new_session(spec.sample_rate as f32)?;

        let samples_per_chunk = self.chunk_frames * usize::from(spec.channels);
        let mut samples = reader.samples::<i16>();
        let mut chunk: Vec<i16> = Vec::with_capacity(samples_per_chunk);
        let mut transcript = Transcript::new();
        let mut chunk_index = 0usize;

        loop {
            chunk.clear();
            for sample in samples.by_ref().take(samples_per_chunk) {
                chunk.push(sample?);
            }
            if chunk.is_empty() {
                break;
            }

            if session.accept_waveform(&chunk)? {
                let result = session.result();
                tracing::debug!(chunk = chunk_index, text = result.text(), "Finalized chunk result");
                transcript.push(TranscriptFragment::new(result.text()));
            } else {
                let partial = session.partial_result();
                tracing::trace!(chunk = chunk_index, partial = partial.text(), "Partial hypothesis");
            }
            chunk_index += 1;
        }

        let final_result = session.final_result();
        let final_text = final_result.text().trim();
        tracing::debug!(chunks = chunk_index, text = final_text, "Final result");
        if !final_text.is_empty() {
            transcript.push(TranscriptFragment::new(final_text));
        }

        Ok(transcript)
    }
}

/// Opens a wave file and checks it is mono, 16-bit integer PCM at 16 kHz.
pub fn open_canonical_wav(path: &Path) -> Result<WavReader<BufReader<File>>, DecodeError> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();

    if spec.channels != 1
        || spec.bits_per_sample != 16
        || spec.sample_format != SampleFormat::Int
        || spec.sample_rate != CANONICAL_SAMPLE_RATE
    {
        tracing::warn!(
            channels = spec.channels,
            bits = spec.bits_per_sample,
            sample_rate = spec.sample_rate,
            "Rejecting non-canonical wave file"
        );
        return Err(DecodeError::InvalidAudioFormat);
    }

    Ok(reader)
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("wave file error: {0}")]
    Wav(#[from] hound::Error),
    #[error("Audio file must be mono PCM at 16kHz.")]
    InvalidAudioFormat,
    #[error(transparent)]
    Recognizer(#[from] RecognizerError),
    #[error("Transcription failed or returned empty output.")]
    EmptyTranscription,
}
