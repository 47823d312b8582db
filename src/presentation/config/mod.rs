mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    DecoderSettings, LoggingSettings, ModelSettings, ServerSettings, Settings, StorageSettings,
    TranscoderSettings,
};
