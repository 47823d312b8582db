use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::services::{DecodeError, PipelineError};

/// Problems with the request itself, detected before any file is written.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("No file part in the request.")]
    NoFilePart,
    #[error("No language specified.")]
    NoLanguage,
    #[error("Language '{0}' not supported.")]
    UnsupportedLanguage(String),
    #[error("No file selected.")]
    NoFileSelected,
    #[error("Uploaded file exceeds the size limit.")]
    PayloadTooLarge,
    #[error("Failed to read multipart: {0}")]
    Multipart(String),
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl UploadError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            UploadError::Validation(ValidationError::PayloadTooLarge) => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            UploadError::Validation(_) => StatusCode::BAD_REQUEST,
            UploadError::Pipeline(PipelineError::Decode(DecodeError::InvalidAudioFormat)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            UploadError::Pipeline(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Upload failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Upload rejected");
        }

        (status, format!("Error: {}", self)).into_response()
    }
}
