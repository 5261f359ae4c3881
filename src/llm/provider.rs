use async_trait::async_trait;

use super::types::ChatRequest;
use crate::core::errors::ApiError;

/// Capability seam for the hosted embedding service, so the retrieval
/// pipeline can be exercised with deterministic fakes.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// embed a single text into a fixed-dimension vector
    async fn embed(&self, input: &str, model_id: &str) -> Result<Vec<f32>, ApiError>;
}

/// Capability seam for the hosted chat-completion service.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// chat completion (non-streaming)
    async fn chat(&self, request: ChatRequest, model_id: &str) -> Result<String, ApiError>;
}
