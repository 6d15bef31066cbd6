use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::suggest::SuggestionCatalog;
use crate::upstream::SearchClient;

pub mod handlers;
pub mod models;

/// Shared read-only state: the upstream client and the suggestion catalog.
/// Both are immutable after startup, so requests need no synchronization.
pub struct AppState {
    pub client: SearchClient,
    pub catalog: SuggestionCatalog,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::search_get).post(handlers::search_post))
        .route("/suggest", get(handlers::suggest_handler))
        .with_state(state)
        // Static assets (stylesheet)
        .nest_service("/static", ServeDir::new("static"))
        .layer(cors)
}
