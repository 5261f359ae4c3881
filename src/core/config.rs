use std::env;
use std::path::PathBuf;

use anyhow::Context;

/// Pinecone index holding the book's passage embeddings.
pub const INDEX_NAME: &str = "book-rag";
/// Namespace isolating this book's passages within the index.
pub const NAMESPACE: &str = "book-namespace";
/// Embedding model; must match the one used when the index was populated.
pub const EMBEDDING_MODEL: &str = "text-embedding-3-small";
/// Chat model answering the composed prompt.
pub const CHAT_MODEL: &str = "gpt-4o-mini";
/// Passages requested per similarity search.
pub const TOP_K: usize = 6;
/// Sampling temperature for the chat model.
pub const TEMPERATURE: f64 = 0.1;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Process-wide configuration, resolved once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Settings {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub pinecone_api_key: String,
    /// Data-plane URL of the index (the host Pinecone assigns per index).
    pub pinecone_index_host: String,
    /// Shared secret gating the query endpoint; open access when unset.
    pub api_secret: Option<String>,
    pub allowed_origins: Vec<String>,
    pub log_dir: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        let openai_api_key =
            env::var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?;
        let pinecone_api_key =
            env::var("PINECONE_API_KEY").context("PINECONE_API_KEY must be set")?;
        let pinecone_index_host =
            env::var("PINECONE_INDEX_HOST").context("PINECONE_INDEX_HOST must be set")?;

        let openai_base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string());

        let api_secret = env::var("API_SECRET")
            .ok()
            .filter(|secret| !secret.trim().is_empty());

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|raw| parse_origins(&raw))
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(default_origins);

        let log_dir = env::var("NAVIGATOR_LOG_DIR").ok().map(PathBuf::from);

        Ok(Self {
            openai_api_key,
            openai_base_url,
            pinecone_api_key,
            pinecone_index_host,
            api_secret,
            allowed_origins,
            log_dir,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| origin.to_string())
        .collect()
}

fn default_origins() -> Vec<String> {
    vec![
        "https://thecarbonatedbody.com".to_string(),
        "https://www.thecarbonatedbody.com".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_origins_splits_and_trims() {
        let origins = parse_origins("https://a.example, https://b.example ,, ");

        assert_eq!(origins, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn default_origins_cover_the_book_site() {
        let origins = default_origins();

        assert_eq!(origins.len(), 2);
        assert!(origins.iter().all(|origin| origin.contains("thecarbonatedbody.com")));
    }
}
