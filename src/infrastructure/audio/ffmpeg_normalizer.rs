use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{MediaNormalizer, NormalizationError};
use crate::application::services::CANONICAL_SAMPLE_RATE;
use crate::domain::temp_audio_path;

pub const DEFAULT_TRANSCODER: &str = "ffmpeg";

/// Normalizes media by shelling out to an ffmpeg-compatible transcoder.
pub struct FfmpegNormalizer {
    binary: String,
}

impl FfmpegNormalizer {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }
}

impl Default for FfmpegNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSCODER)
    }
}

#[async_trait]
impl MediaNormalizer for FfmpegNormalizer {
    #[tracing::instrument(skip(self), fields(binary = %self.binary))]
    async fn extract_audio(&self, input: &Path, output: &Path) -> Result<(), NormalizationError> {
        if !tokio::fs::try_exists(input).await? {
            return Err(NormalizationError::InputNotFound(input.to_path_buf()));
        }

        let temp_output = temp_audio_path(output);
        remove_if_exists(&temp_output).await?;
        remove_if_exists(output).await?;

        let sample_rate = CANONICAL_SAMPLE_RATE.to_string();
        let result = Command::new(&self.binary)
            .arg("-i")
            .arg(input)
            .args(["-ar", sample_rate.as_str(), "-ac", "1", "-f", "wav"])
            .arg(&temp_output)
            .arg("-y")
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| NormalizationError::TranscoderUnavailable {
                binary: self.binary.clone(),
                reason: e.to_string(),
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr).into_owned();
            tracing::warn!(status = ?result.status.code(), "Transcoder exited with failure");
            return Err(NormalizationError::ConversionFailed(stderr));
        }

        // A zero exit without a temp file surfaces as the rename's NotFound io error.
        tokio::fs::rename(&temp_output, output).await?;

        tracing::debug!(output = %output.display(), "Media normalized to 16kHz mono wav");

        Ok(())
    }
}

async fn remove_if_exists(path: &Path) -> Result<(), std::io::Error> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// Probes `<binary> -version` so a missing transcoder is reported at startup.
pub async fn check_ffmpeg_binary(binary: &str) -> Result<(), NormalizationError> {
    let output = Command::new(binary)
        .arg("-version")
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|e| NormalizationError::TranscoderUnavailable {
            binary: binary.to_string(),
            reason: e.to_string(),
        })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(NormalizationError::TranscoderUnavailable {
            binary: binary.to_string(),
            reason: format!("exited with {}", output.status),
        })
    }
}
