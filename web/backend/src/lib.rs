pub mod cache;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod wikipedia;

use axum::{
    Router,
    routing::{get, post},
};
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use wikirace_core::LinkSource;

pub fn router<S: LinkSource + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/solve", post(handlers::solve::<S>))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
