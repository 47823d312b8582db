use std::path::Path;
use std::sync::Arc;

use vosk::{CompleteResult, DecodingState, Model, Recognizer};

use crate::application::ports::{
    ModelLoader, RecognitionModel, RecognitionResult, RecognizerError, RecognizerSession,
};

pub struct VoskModelLoader;

impl ModelLoader for VoskModelLoader {
    fn load(&self, model_dir: &Path) -> Result<Arc<dyn RecognitionModel>, RecognizerError> {
        let path = model_dir.to_str().ok_or_else(|| {
            RecognizerError::ModelLoadFailed(format!(
                "model path is not valid UTF-8: {}",
                model_dir.display()
            ))
        })?;

        let model = Model::new(path).ok_or_else(|| {
            RecognizerError::ModelLoadFailed(format!("vosk rejected model at {}", path))
        })?;

        Ok(Arc::new(VoskModel { model }))
    }
}

pub struct VoskModel {
    model: Model,
}

impl RecognitionModel for VoskModel {
    fn new_session(
        &self,
        sample_rate: f32,
    ) -> Result<Box<dyn RecognizerSession>, RecognizerError> {
        let recognizer = Recognizer::new(&self.model, sample_rate).ok_or_else(|| {
            RecognizerError::SessionFailed(format!(
                "could not create recognizer at {} Hz",
                sample_rate
            ))
        })?;
        Ok(Box::new(VoskSession { recognizer }))
    }
}

struct VoskSession {
    recognizer: Recognizer,
}

impl RecognizerSession for VoskSession {
    fn accept_waveform(&mut self, samples: &[i16]) -> Result<bool, RecognizerError> {
        match self.recognizer.accept_waveform(samples) {
            Ok(DecodingState::Finalized) => Ok(true),
            Ok(DecodingState::Running) => Ok(false),
            Ok(DecodingState::Failed) => Err(RecognizerError::WaveformRejected(
                "decoder reported failure".to_string(),
            )),
            Err(e) => Err(RecognizerError::WaveformRejected(format!("{:?}", e))),
        }
    }

    fn result(&mut self) -> RecognitionResult {
        complete_text(self.recognizer.result())
    }

    fn partial_result(&mut self) -> RecognitionResult {
        RecognitionResult::new(self.recognizer.partial_result().partial)
    }

    fn final_result(&mut self) -> RecognitionResult {
        complete_text(self.recognizer.final_result())
    }
}

fn complete_text(result: CompleteResult<'_>) -> RecognitionResult {
    match result {
        CompleteResult::Single(single) => RecognitionResult::new(single.text),
        CompleteResult::Multiple(multiple) => multiple
            .alternatives
            .first()
            .map(|alt| RecognitionResult::new(alt.text))
            .unwrap_or_default(),
    }
}
