use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::store::{Passage, VectorStore};
use crate::core::errors::ApiError;

/// Pinecone data-plane client for the passage index.
///
/// Talks directly to the index host (the per-index URL Pinecone assigns);
/// similarity search itself runs on the service side.
#[derive(Clone)]
pub struct PineconeStore {
    index_host: String,
    api_key: String,
    namespace: String,
    client: Client,
}

impl PineconeStore {
    pub fn new(index_host: String, api_key: String, namespace: String) -> Self {
        Self {
            index_host: index_host.trim_end_matches('/').to_string(),
            api_key,
            namespace,
            client: Client::new(),
        }
    }
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<QueryMatch>,
}

#[derive(Deserialize)]
struct QueryMatch {
    score: f32,
    metadata: Option<MatchMetadata>,
}

/// Metadata written at indexing time. Pinecone stores numbers as floats,
/// so the page arrives as f64 even though it is an integer in the book.
#[derive(Deserialize, Default)]
struct MatchMetadata {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    page: Option<f64>,
}

#[async_trait]
impl VectorStore for PineconeStore {
    async fn search(
        &self,
        query_embedding: &[f32],
        top_k: usize,
    ) -> Result<Vec<Passage>, ApiError> {
        let url = format!("{}/query", self.index_host);

        let body = json!({
            "vector": query_embedding,
            "topK": top_k,
            "namespace": self.namespace,
            "includeMetadata": true,
        });

        let res = self
            .client
            .post(&url)
            .header("Api-Key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(ApiError::internal)?;

        if !res.status().is_success() {
            let text = res.text().await.unwrap_or_default();
            return Err(ApiError::Internal(format!("Pinecone query error: {}", text)));
        }

        let payload: QueryResponse = res.json().await.map_err(ApiError::internal)?;

        // Matches without text metadata keep their rank position as
        // empty-text passages rather than being dropped.
        let passages = payload
            .matches
            .into_iter()
            .map(|m| {
                let metadata = m.metadata.unwrap_or_default();
                Passage {
                    text: metadata.text.unwrap_or_default(),
                    page: metadata.page.map(|page| page as u32),
                    score: m.score,
                }
            })
            .collect();

        Ok(passages)
    }
}
