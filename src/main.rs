use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use voxscribe::application::services::{ModelRegistry, StreamDecoder, TranscriptionService};
use voxscribe::infrastructure::audio::{FfmpegNormalizer, ModelLoaderFactory, check_ffmpeg_binary};
use voxscribe::infrastructure::observability::{TracingConfig, init_tracing};
use voxscribe::infrastructure::storage::LocalUploadStore;
use voxscribe::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging));

    let upload_store = Arc::new(
        LocalUploadStore::new(settings.storage.uploads_dir.clone())
            .context("Failed to create uploads directory")?,
    );

    if let Err(e) = check_ffmpeg_binary(&settings.transcoder.binary).await {
        tracing::warn!(error = %e, "Transcoder not available; uploads will fail until it is installed");
    }
    let normalizer = Arc::new(FfmpegNormalizer::new(settings.transcoder.binary.clone()));

    let model_registry = Arc::new(ModelRegistry::new(
        ModelLoaderFactory::create(settings.models.provider),
        settings.models.root_dir.clone(),
    ));

    let transcription_service = Arc::new(TranscriptionService::new(
        upload_store,
        normalizer,
        model_registry,
        StreamDecoder::new(settings.decoder.chunk_frames),
    ));

    let state = AppState {
        transcription_service,
        max_upload_bytes: settings.storage.max_upload_bytes(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!(
        %addr,
        uploads_dir = %settings.storage.uploads_dir.display(),
        models_dir = %settings.models.root_dir.display(),
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
