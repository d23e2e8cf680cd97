use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use history_api::HistoryService;
use tower_http::services::ServeDir;

use crate::routes::{handle_get_history, handle_save_history};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) service: Arc<dyn HistoryService>,
}

impl AppState {
    pub(crate) fn new(service: Arc<dyn HistoryService>) -> Self {
        Self { service }
    }
}

/// Directories of pre-built front-end assets.
#[derive(Debug, Clone)]
pub struct StaticAssets {
    pub public_dir: PathBuf,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

/// Build the HTTP router: the two history routes, `/input` and `/output`
/// file trees, and the public directory for everything else (`/` serves
/// its `index.html`).
pub(crate) fn router(state: AppState, assets: &StaticAssets, body_limit: usize) -> Router {
    Router::new()
        .route("/save-history", post(handle_save_history))
        .route("/get-history", get(handle_get_history))
        .nest_service("/input", ServeDir::new(&assets.input_dir))
        .nest_service("/output", ServeDir::new(&assets.output_dir))
        .fallback_service(ServeDir::new(&assets.public_dir))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
