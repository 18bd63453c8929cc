use crate::{handlers, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/api/health", get(handlers::health))
        // Language registry
        .route("/api/languages", get(handlers::languages))
        // Transformation operations
        .route("/api/transform", post(handlers::transform))
        // Add state
        .with_state(state)
        // Add middleware
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .layer(TraceLayer::new_for_http())
}
