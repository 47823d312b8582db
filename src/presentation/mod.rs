pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod views;

pub use config::{Environment, Settings};
pub use error::{UploadError, ValidationError};
pub use router::create_router;
pub use state::AppState;
