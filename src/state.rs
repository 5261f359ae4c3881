use std::sync::Arc;

use crate::core::config::{self, Settings};
use crate::llm::openai::OpenAiClient;
use crate::rag::engine::NavigatorEngine;
use crate::rag::pinecone::PineconeStore;
use crate::rag::retriever::Retriever;

pub struct AppState {
    pub settings: Settings,
    pub engine: NavigatorEngine,
}

impl AppState {
    /// Wire the live service clients into the engine. One OpenAI client
    /// serves both the embedding and the completion capability.
    pub fn initialize(settings: Settings) -> Arc<Self> {
        let openai = Arc::new(OpenAiClient::new(
            settings.openai_base_url.clone(),
            settings.openai_api_key.clone(),
        ));
        let store = Arc::new(PineconeStore::new(
            settings.pinecone_index_host.clone(),
            settings.pinecone_api_key.clone(),
            config::NAMESPACE.to_string(),
        ));

        let retriever = Retriever::new(
            openai.clone(),
            store,
            config::EMBEDDING_MODEL.to_string(),
            config::TOP_K,
        );
        let engine = NavigatorEngine::new(
            retriever,
            openai,
            config::CHAT_MODEL.to_string(),
            config::TEMPERATURE,
        );

        Arc::new(AppState { settings, engine })
    }

    /// Build state around an existing engine. Tests inject fake providers
    /// through this path.
    pub fn with_engine(settings: Settings, engine: NavigatorEngine) -> Arc<Self> {
        Arc::new(AppState { settings, engine })
    }
}
