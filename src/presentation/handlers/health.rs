use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::application::ports::{MediaNormalizer, UploadStore};
use crate::domain::LanguageCode;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub loaded_models: Vec<String>,
}

pub async fn health_handler<S, N>(State(state): State<AppState<S, N>>) -> Json<HealthResponse>
where
    S: UploadStore + ?Sized + 'static,
    N: MediaNormalizer + ?Sized + 'static,
{
    let registry = state.transcription_service.model_registry();
    let mut loaded_models = Vec::new();
    for language in LanguageCode::ALL {
        if registry.is_loaded(language).await {
            loaded_models.push(language.as_str().to_string());
        }
    }

    Json(HealthResponse {
        status: "healthy".to_string(),
        loaded_models,
    })
}
