use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use bytes::Bytes;

use crate::application::ports::{MediaNormalizer, UploadStore};
use crate::domain::{LanguageCode, UploadId, UploadPath};
use crate::presentation::error::{UploadError, ValidationError};
use crate::presentation::state::AppState;
use crate::presentation::views;

struct FilePart {
    filename: String,
    data: Bytes,
}

/// Raw multipart fields, before any validation.
#[derive(Default)]
struct UploadForm {
    file: Option<FilePart>,
    language: Option<String>,
}

impl UploadForm {
    async fn read(mut multipart: Multipart) -> Result<Self, ValidationError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();
            // Only parts with a filename attribute are files; the rest are plain form values.
            let filename = field.file_name().map(str::to_string);
            match (name.as_str(), filename) {
                ("file", Some(filename)) if form.file.is_none() => {
                    let data = field.bytes().await.map_err(multipart_error)?;
                    form.file = Some(FilePart { filename, data });
                }
                ("language", None) if form.language.is_none() => {
                    form.language = Some(field.text().await.map_err(multipart_error)?);
                }
                _ => {}
            }
        }

        Ok(form)
    }

    fn validate(self) -> Result<(LanguageCode, UploadPath, Bytes), ValidationError> {
        let file = self.file.ok_or(ValidationError::NoFilePart)?;
        let raw_language = self.language.ok_or(ValidationError::NoLanguage)?;
        let Ok(language) = raw_language.parse::<LanguageCode>() else {
            return Err(ValidationError::UnsupportedLanguage(raw_language));
        };

        if file.filename.is_empty() {
            return Err(ValidationError::NoFileSelected);
        }
        let upload_path =
            UploadPath::new(&UploadId::new(), &file.filename).ok_or(ValidationError::NoFileSelected)?;

        Ok((language, upload_path, file.data))
    }
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> ValidationError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ValidationError::PayloadTooLarge
    } else {
        ValidationError::Multipart(e.body_text())
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<S, N>(
    State(state): State<AppState<S, N>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Html<String>, UploadError>
where
    S: UploadStore + ?Sized + 'static,
    N: MediaNormalizer + ?Sized + 'static,
{
    // Anything that is not a multipart body carries no file part.
    let multipart = multipart.map_err(|_| ValidationError::NoFilePart)?;

    let (language, upload_path, data) = UploadForm::read(multipart).await?.validate()?;

    tracing::info!(
        upload_id = %upload_path.id().as_uuid(),
        file_name = upload_path.file_name(),
        language = %language,
        bytes = data.len(),
        "Transcription requested"
    );

    let transcript = state
        .transcription_service
        .transcribe_upload(&upload_path, language, &data)
        .await?;

    tracing::info!(
        upload_id = %upload_path.id().as_uuid(),
        chars = transcript.len(),
        "Transcription delivered"
    );

    Ok(Html(views::transcription_page(&transcript)))
}
