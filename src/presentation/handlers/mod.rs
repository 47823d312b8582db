mod health;
mod upload;
mod upload_form;

pub use health::health_handler;
pub use upload::upload_handler;
pub use upload_form::upload_form_handler;
