use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{MediaNormalizer, UploadStore};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, upload_form_handler, upload_handler};
use crate::presentation::state::AppState;

pub fn create_router<S, N>(state: AppState<S, N>) -> Router
where
    S: UploadStore + ?Sized + 'static,
    N: MediaNormalizer + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(upload_form_handler))
        .route("/upload", post(upload_handler::<S, N>))
        .route("/health", get(health_handler::<S, N>))
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
