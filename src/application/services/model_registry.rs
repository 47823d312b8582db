use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell};

use crate::application::ports::{ModelLoader, RecognitionModel, RecognizerError};
use crate::domain::LanguageCode;

type ModelSlot = Arc<OnceCell<Arc<dyn RecognitionModel>>>;

/// Process-wide cache of recognition models, one per language.
///
/// Each language owns a once-cell, so concurrent first requests for the same
/// language wait on a single load instead of racing. A failed load leaves the
/// cell empty and the next request retries.
pub struct ModelRegistry {
    loader: Arc<dyn ModelLoader>,
    root_dir: PathBuf,
    slots: Mutex<HashMap<LanguageCode, ModelSlot>>,
}

impl ModelRegistry {
    pub fn new(loader: Arc<dyn ModelLoader>, root_dir: impl Into<PathBuf>) -> Self {
        Self {
            loader,
            root_dir: root_dir.into(),
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub fn model_dir(&self, language: LanguageCode) -> PathBuf {
        self.root_dir.join(language.as_str())
    }

    pub async fn get_model(
        &self,
        language: LanguageCode,
    ) -> Result<Arc<dyn RecognitionModel>, ModelRegistryError> {
        let slot = {
            let mut slots = self.slots.lock().await;
            Arc::clone(slots.entry(language).or_default())
        };

        slot.get_or_try_init(|| self.load(language))
            .await
            .map(Arc::clone)
    }

    pub async fn is_loaded(&self, language: LanguageCode) -> bool {
        self.slots
            .lock()
            .await
            .get(&language)
            .is_some_and(|slot| slot.initialized())
    }

    async fn load(
        &self,
        language: LanguageCode,
    ) -> Result<Arc<dyn RecognitionModel>, ModelRegistryError> {
        let model_dir = self.model_dir(language);

        if !tokio::fs::try_exists(&model_dir).await.unwrap_or(false) {
            tracing::error!(language = %language, path = %model_dir.display(), "Model directory missing");
            return Err(ModelRegistryError::ModelNotFound(language));
        }

        tracing::info!(language = %language, path = %model_dir.display(), "Loading recognition model");

        let loader = Arc::clone(&self.loader);
        let model = tokio::task::spawn_blocking(move || loader.load(&model_dir))
            .await
            .map_err(|e| ModelRegistryError::TaskFailed(e.to_string()))??;

        tracing::info!(language = %language, "Recognition model loaded");

        Ok(model)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ModelRegistryError {
    #[error("Model for language '{0}' not found.")]
    ModelNotFound(LanguageCode),
    #[error(transparent)]
    Load(#[from] RecognizerError),
    #[error("model loading task failed: {0}")]
    TaskFailed(String),
}
