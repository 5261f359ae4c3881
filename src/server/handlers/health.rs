use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Static liveness payload, independent of configuration and upstream
/// service availability.
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "book-navigator-rag"
    }))
}
