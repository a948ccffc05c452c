pub mod health;
pub mod page;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::advisor::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/profile/options",
            get(handlers::handle_profile_options),
        )
        .route(
            "/api/v1/careers/recommend",
            post(handlers::handle_recommend),
        )
        .route("/api/v1/chat", post(handlers::handle_chat))
        .fallback(not_found)
        .with_state(state)
}
