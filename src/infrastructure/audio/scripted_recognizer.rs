use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{
    ModelLoader, RecognitionModel, RecognitionResult, RecognizerError, RecognizerSession,
};

/// Recognizer that replays a fixed script instead of listening to the audio.
///
/// Entry `i` of `chunk_results` decides what happens on the `i`-th accepted chunk:
/// `Some(text)` finalizes a result with that text, `None` keeps decoding. Chunks
/// past the end of the script never finalize.
#[derive(Debug, Clone, Default)]
pub struct ScriptedModel {
    chunk_results: Vec<Option<String>>,
    final_text: Option<String>,
}

impl ScriptedModel {
    pub fn new(chunk_results: Vec<Option<String>>, final_text: Option<String>) -> Self {
        Self {
            chunk_results,
            final_text,
        }
    }

    /// Model used in scaffold mode: a single canned final result.
    pub fn scaffold() -> Self {
        Self::new(Vec::new(), Some("scaffold transcript".to_string()))
    }
}

impl RecognitionModel for ScriptedModel {
    fn new_session(
        &self,
        sample_rate: f32,
    ) -> Result<Box<dyn RecognizerSession>, RecognizerError> {
        if sample_rate <= 0.0 {
            return Err(RecognizerError::SessionFailed(format!(
                "invalid sample rate {}",
                sample_rate
            )));
        }
        Ok(Box::new(ScriptedSession {
            script: self.clone(),
            accepted: 0,
            pending: RecognitionResult::empty(),
        }))
    }
}

struct ScriptedSession {
    script: ScriptedModel,
    accepted: usize,
    pending: RecognitionResult,
}

impl RecognizerSession for ScriptedSession {
    fn accept_waveform(&mut self, samples: &[i16]) -> Result<bool, RecognizerError> {
        if samples.is_empty() {
            return Err(RecognizerError::WaveformRejected("empty chunk".to_string()));
        }

        let step = self.script.chunk_results.get(self.accepted).cloned().flatten();
        self.accepted += 1;

        match step {
            Some(text) => {
                self.pending = RecognitionResult::new(text);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn result(&mut self) -> RecognitionResult {
        std::mem::take(&mut self.pending)
    }

    fn partial_result(&mut self) -> RecognitionResult {
        RecognitionResult::empty()
    }

    fn final_result(&mut self) -> RecognitionResult {
        RecognitionResult {
            text: self.script.final_text.clone(),
        }
    }
}

/// Hands out one shared scripted model and counts how often it was asked to load.
pub struct ScriptedModelLoader {
    model: Arc<ScriptedModel>,
    loads: AtomicUsize,
}

impl ScriptedModelLoader {
    pub fn new(model: ScriptedModel) -> Self {
        Self {
            model: Arc::new(model),
            loads: AtomicUsize::new(0),
        }
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl ModelLoader for ScriptedModelLoader {
    fn load(&self, model_dir: &Path) -> Result<Arc<dyn RecognitionModel>, RecognizerError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(path = %model_dir.display(), "Loading scripted model");
        Ok(Arc::new(ScriptedModel::clone(&self.model)))
    }
}
