use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::repositories::AudioStorageRepository;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(
    State(storage): State<Arc<dyn AudioStorageRepository>>,
) -> impl IntoResponse {
    match storage.check_bucket().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "storage": "connected",
                "tts": "available"
            })),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "storage": "disconnected",
                "tts": "unknown"
            })),
        ),
    }
}
