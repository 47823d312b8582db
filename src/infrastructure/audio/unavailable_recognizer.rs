use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{ModelLoader, RecognitionModel, RecognizerError};

/// Stands in for the Vosk engine in builds without the `vosk` feature.
pub struct UnavailableModelLoader;

impl ModelLoader for UnavailableModelLoader {
    fn load(&self, model_dir: &Path) -> Result<Arc<dyn RecognitionModel>, RecognizerError> {
        Err(RecognizerError::ModelLoadFailed(format!(
            "cannot load '{}': speech recognition support was not compiled in (enable the `vosk` feature)",
            model_dir.display()
        )))
    }
}
