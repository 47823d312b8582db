use std::path::PathBuf;

use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};

use crate::application::services::{DEFAULT_CHUNK_FRAMES, MAX_CHUNK_FRAMES};
use crate::infrastructure::audio::{DEFAULT_TRANSCODER, RecognizerProvider};

use super::Environment;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub models: ModelSettings,
    pub transcoder: TranscoderSettings,
    pub decoder: DecoderSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    pub uploads_dir: PathBuf,
    pub max_upload_mb: usize,
}

impl StorageSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    pub root_dir: PathBuf,
    pub provider: RecognizerProvider,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscoderSettings {
    pub binary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecoderSettings {
    pub chunk_frames: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            storage: StorageSettings {
                uploads_dir: PathBuf::from("uploads"),
                max_upload_mb: 512,
            },
            models: ModelSettings {
                root_dir: PathBuf::from("model"),
                provider: RecognizerProvider::Vosk,
            },
            transcoder: TranscoderSettings {
                binary: DEFAULT_TRANSCODER.to_string(),
            },
            decoder: DecoderSettings {
                chunk_frames: DEFAULT_CHUNK_FRAMES,
            },
            logging: LoggingSettings {
                level: "info".to_string(),
                json: false,
            },
        }
    }
}

impl Settings {
    /// Layers built-in defaults, the optional `appsettings.<env>` file and
    /// `APP_`-prefixed environment variables (`__` separates nested keys).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let chunk_frames = self.decoder.chunk_frames;
        if !(1..=MAX_CHUNK_FRAMES).contains(&chunk_frames) {
            return Err(ConfigError::Message(format!(
                "decoder.chunk_frames must be between 1 and {}, got {}",
                MAX_CHUNK_FRAMES, chunk_frames
            )));
        }
        Ok(())
    }
}
