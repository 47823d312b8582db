use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::application::ports::ModelLoader;

use super::scripted_recognizer::{ScriptedModel, ScriptedModelLoader};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecognizerProvider {
    Vosk,
    Scaffold,
}

pub struct ModelLoaderFactory;

impl ModelLoaderFactory {
    pub fn create(provider: RecognizerProvider) -> Arc<dyn ModelLoader> {
        match provider {
            RecognizerProvider::Vosk => vosk_loader(),
            RecognizerProvider::Scaffold => {
                tracing::warn!("Scaffold recognizer active: transcripts are canned");
                Arc::new(ScriptedModelLoader::new(ScriptedModel::scaffold()))
            }
        }
    }
}

#[cfg(feature = "vosk")]
fn vosk_loader() -> Arc<dyn ModelLoader> {
    Arc::new(super::vosk_recognizer::VoskModelLoader)
}

#[cfg(not(feature = "vosk"))]
fn vosk_loader() -> Arc<dyn ModelLoader> {
    tracing::warn!("Built without the `vosk` feature; model loads will fail");
    Arc::new(super::unavailable_recognizer::UnavailableModelLoader)
}
