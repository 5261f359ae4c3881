use std::sync::Arc;

use super::store::{Passage, VectorStore};
use crate::core::errors::ApiError;
use crate::llm::provider::EmbeddingProvider;

/// Embeds a question and queries the vector index for its nearest passages.
#[derive(Clone)]
pub struct Retriever {
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStore>,
    embedding_model: String,
    top_k: usize,
}

impl Retriever {
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn VectorStore>,
        embedding_model: String,
        top_k: usize,
    ) -> Self {
        Self {
            embedder,
            store,
            embedding_model,
            top_k,
        }
    }

    /// Top-K passages for a question, in descending similarity order.
    /// Errors from either hop propagate unchanged.
    pub async fn retrieve(&self, question: &str) -> Result<Vec<Passage>, ApiError> {
        let embedding = self.embedder.embed(question, &self.embedding_model).await?;
        let passages = self.store.search(&embedding, self.top_k).await?;

        tracing::debug!(
            "Retrieved {} passages for question ({} chars)",
            passages.len(),
            question.len()
        );

        Ok(passages)
    }
}
