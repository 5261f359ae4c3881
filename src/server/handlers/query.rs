use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::core::errors::ApiError;
use crate::core::security::require_bearer;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub question: String,
    #[serde(default)]
    pub show_context: bool,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub question: String,
    pub answer: String,
    pub context: Option<String>,
}

pub async fn query(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    require_bearer(&headers, state.settings.api_secret.as_deref())?;

    if payload.question.trim().is_empty() {
        return Err(ApiError::BadRequest("question must not be empty".to_string()));
    }

    let outcome = state
        .engine
        .answer(&payload.question, payload.show_context)
        .await?;

    Ok(Json(QueryResponse {
        question: payload.question,
        answer: outcome.answer,
        context: outcome.context,
    }))
}
