//! VectorStore trait — abstract interface over the hosted passage index.
//!
//! Search-only: index population happens out-of-band, so implementations
//! expose nothing but similarity search.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::errors::ApiError;

/// A passage retrieved from the vector index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passage {
    /// The raw passage text.
    pub text: String,
    /// Book page number, when the index carries one for this passage.
    pub page: Option<u32>,
    /// Similarity score (higher = better).
    pub score: f32,
}

/// Abstract trait for the vector index backend.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Search for the passages most similar to the query embedding,
    /// returned in descending similarity order.
    async fn search(
        &self,
        query_embedding: &[f32],
        top_k: usize,
    ) -> Result<Vec<Passage>, ApiError>;
}
