use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use hound::{SampleFormat, WavSpec, WavWriter};

use voxscribe::application::ports::{MediaNormalizer, NormalizationError};
use voxscribe::application::services::{ModelRegistry, StreamDecoder, TranscriptionService};
use voxscribe::domain::LanguageCode;
use voxscribe::infrastructure::audio::{ScriptedModel, ScriptedModelLoader};
use voxscribe::infrastructure::storage::LocalUploadStore;
use voxscribe::presentation::{AppState, create_router};

pub const BOUNDARY: &str = "voxscribe-test-boundary";

pub fn write_wav(path: &Path, sample_rate: u32, channels: u16, samples: &[i16]) {
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).unwrap();
    for &s in samples {
        writer.write_sample(s).unwrap();
    }
    writer.finalize().unwrap();
}

pub fn write_canonical_wav(path: &Path, frames: usize) {
    write_wav(path, 16_000, 1, &vec![0i16; frames]);
}

pub fn script(chunks: &[Option<&str>], final_text: Option<&str>) -> ScriptedModel {
    ScriptedModel::new(
        chunks.iter().map(|c| c.map(str::to_string)).collect(),
        final_text.map(str::to_string),
    )
}

/// Creates `<root>/<code>/` for every supported language.
pub fn create_model_dirs(root: &Path) {
    for language in LanguageCode::ALL {
        std::fs::create_dir_all(root.join(language.as_str())).unwrap();
    }
}

/// Writes a silent canonical wave file instead of running a transcoder.
pub struct SilentWavNormalizer {
    pub frames: usize,
}

#[async_trait]
impl MediaNormalizer for SilentWavNormalizer {
    async fn extract_audio(&self, input: &Path, output: &Path) -> Result<(), NormalizationError> {
        if !input.exists() {
            return Err(NormalizationError::InputNotFound(input.to_path_buf()));
        }
        write_canonical_wav(output, self.frames);
        Ok(())
    }
}

/// Reports success without producing any output.
pub struct NoOutputNormalizer;

#[async_trait]
impl MediaNormalizer for NoOutputNormalizer {
    async fn extract_audio(&self, _input: &Path, _output: &Path) -> Result<(), NormalizationError> {
        Ok(())
    }
}

pub struct FailingNormalizer {
    pub stderr: String,
}

#[async_trait]
impl MediaNormalizer for FailingNormalizer {
    async fn extract_audio(&self, _input: &Path, _output: &Path) -> Result<(), NormalizationError> {
        Err(NormalizationError::ConversionFailed(self.stderr.clone()))
    }
}

pub type TestService = TranscriptionService<LocalUploadStore, dyn MediaNormalizer>;

pub struct TestEnv {
    pub dir: tempfile::TempDir,
    pub loader: Arc<ScriptedModelLoader>,
    pub service: Arc<TestService>,
}

impl TestEnv {
    pub fn uploads_dir(&self) -> PathBuf {
        self.dir.path().join("uploads")
    }

    pub fn models_dir(&self) -> PathBuf {
        self.dir.path().join("model")
    }

    pub fn router(&self, max_upload_bytes: usize) -> axum::Router {
        create_router(AppState {
            transcription_service: Arc::clone(&self.service),
            max_upload_bytes,
        })
    }
}

pub fn test_env(model: ScriptedModel, normalizer: Arc<dyn MediaNormalizer>) -> TestEnv {
    test_env_with_models(model, normalizer, true)
}

pub fn test_env_with_models(
    model: ScriptedModel,
    normalizer: Arc<dyn MediaNormalizer>,
    with_model_dirs: bool,
) -> TestEnv {
    let dir = tempfile::TempDir::new().unwrap();
    let uploads = dir.path().join("uploads");
    let models = dir.path().join("model");
    if with_model_dirs {
        create_model_dirs(&models);
    }

    let loader = Arc::new(ScriptedModelLoader::new(model));
    let registry = Arc::new(ModelRegistry::new(loader.clone(), models));
    let store = Arc::new(LocalUploadStore::new(uploads).unwrap());
    let service = Arc::new(TranscriptionService::new(
        store,
        normalizer,
        registry,
        StreamDecoder::default(),
    ));

    TestEnv {
        dir,
        loader,
        service,
    }
}

/// Hand-built multipart/form-data body.
#[derive(Default)]
pub struct MultipartBody {
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, name: &str, filename: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                .as_bytes(),
        );
        self
    }

    pub fn build(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }
}

pub fn content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}
