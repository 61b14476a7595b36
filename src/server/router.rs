// file: src/server/router.rs
// description: axum router and shared application state
// reference: https://docs.rs/axum

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::search::SearchService;

use super::handlers;

/// State shared across all request handlers. Built once after bootstrap;
/// nothing in it is mutated afterwards.
pub struct AppState {
    pub search: SearchService,
}

pub fn create_router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/", get(handlers::home))
        .route("/api/search", get(handlers::api_search))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
