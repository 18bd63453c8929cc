use crate::orchestrator::{TransformRequest, TransformResponse};
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use syntaxshift_core::registry;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct LanguagesResponse {
    pub supported_languages: Vec<&'static str>,
    pub default_language: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "Syntax Shift API".to_string(),
        version: option_env!("CARGO_PKG_VERSION")
            .unwrap_or("0.1.0")
            .to_string(),
    })
}

pub async fn languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        supported_languages: registry::supported_languages(),
        default_language: "python",
    })
}

/// Main endpoint for code transformation operations.
///
/// The orchestrator always yields a well-formed envelope; a malformed body
/// is rejected by the extractor before it runs.
pub async fn transform(
    State(state): State<AppState>,
    Json(request): Json<TransformRequest>,
) -> Json<TransformResponse> {
    Json(state.orchestrator.handle(request).await)
}
