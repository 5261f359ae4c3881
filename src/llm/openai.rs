use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::provider::{CompletionProvider, EmbeddingProvider};
use super::types::ChatRequest;
use crate::core::errors::ApiError;

/// Client for the hosted OpenAI API, covering the two capabilities this
/// service needs: embeddings and non-streaming chat completions.
#[derive(Clone)]
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl OpenAiClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client: Client::new(),
        }
    }
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingItem>,
}

#[derive(Deserialize)]
struct EmbeddingItem {
    embedding: Vec<f32>,
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn chat(&self, request: ChatRequest, model_id: &str) -> Result<String, ApiError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let mut body = json!({
            "model": model_id,
            "messages": request.messages,
            "stream": false,
        });

        if let Some(obj) = body.as_object_mut() {
            if let Some(t) = request.temperature {
                obj.insert("temperature".to_string(), json!(t));
            }
            if let Some(t) = request.max_tokens {
                obj.insert("max_tokens".to_string(), json!(t));
            }
        }

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(ApiError::internal)?;

        if !res.status().is_success() {
            let text = res.text().await.unwrap_or_default();
            return Err(ApiError::Internal(format!("OpenAI chat error: {}", text)));
        }

        let payload: ChatCompletionResponse = res.json().await.map_err(ApiError::internal)?;

        let content = payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        Ok(content)
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiClient {
    async fn embed(&self, input: &str, model_id: &str) -> Result<Vec<f32>, ApiError> {
        let url = format!("{}/v1/embeddings", self.base_url);

        let body = json!({
            "model": model_id,
            "input": input,
        });

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(ApiError::internal)?;

        if !res.status().is_success() {
            let text = res.text().await.unwrap_or_default();
            return Err(ApiError::Internal(format!("OpenAI embeddings error: {}", text)));
        }

        let payload: EmbeddingsResponse = res.json().await.map_err(ApiError::internal)?;

        payload
            .data
            .into_iter()
            .next()
            .map(|item| item.embedding)
            .ok_or_else(|| {
                ApiError::Internal("OpenAI embeddings response contained no vectors".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::types::ChatMessage;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn chat_returns_first_choice_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "gpt-4o-mini",
                "stream": false,
                "temperature": 0.1,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "Chapter 3 — The Terrain (pp. 41–58)."}}
                ]
            })))
            .mount(&server)
            .await;

        let client = OpenAiClient::new(server.uri(), "test-key".to_string());
        let request =
            ChatRequest::new(vec![ChatMessage::user("Where is inflammation discussed?")])
                .with_temperature(0.1);

        let answer = client.chat(request, "gpt-4o-mini").await.unwrap();

        assert_eq!(answer, "Chapter 3 — The Terrain (pp. 41–58).");
    }

    #[tokio::test]
    async fn chat_error_status_collapses_to_internal() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&server)
            .await;

        let client = OpenAiClient::new(server.uri(), "test-key".to_string());
        let request = ChatRequest::new(vec![ChatMessage::user("hello")]);

        let result = client.chat(request, "gpt-4o-mini").await;

        assert!(matches!(result, Err(ApiError::Internal(ref msg)) if msg.contains("upstream exploded")));
    }

    #[tokio::test]
    async fn embed_returns_first_vector() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/embeddings"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "text-embedding-3-small",
                "input": "What is inflammation?",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"embedding": [0.25, -0.5, 0.75]}]
            })))
            .mount(&server)
            .await;

        let client = OpenAiClient::new(server.uri(), "test-key".to_string());

        let embedding = client
            .embed("What is inflammation?", "text-embedding-3-small")
            .await
            .unwrap();

        assert_eq!(embedding, vec![0.25, -0.5, 0.75]);
    }

    #[tokio::test]
    async fn embed_rejects_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/embeddings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
            .mount(&server)
            .await;

        let client = OpenAiClient::new(server.uri(), "test-key".to_string());

        let result = client.embed("question", "text-embedding-3-small").await;

        assert!(matches!(result, Err(ApiError::Internal(_))));
    }
}
