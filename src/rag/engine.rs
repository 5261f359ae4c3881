//! Query orchestration: retrieve → format → compose → complete.

use std::sync::Arc;

use super::context::format_context;
use super::prompt::compose_prompt;
use super::retriever::Retriever;
use crate::core::errors::ApiError;
use crate::llm::provider::CompletionProvider;
use crate::llm::types::{ChatMessage, ChatRequest};

/// Result of one query: the model's answer plus, on request, the formatted
/// context surfaced to the caller.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub answer: String,
    pub context: Option<String>,
}

/// Wires the retrieval pipeline to the chat model. Holds only read-only
/// configuration and stateless clients, so queries can run concurrently.
#[derive(Clone)]
pub struct NavigatorEngine {
    retriever: Retriever,
    completer: Arc<dyn CompletionProvider>,
    chat_model: String,
    temperature: f64,
}

impl NavigatorEngine {
    pub fn new(
        retriever: Retriever,
        completer: Arc<dyn CompletionProvider>,
        chat_model: String,
        temperature: f64,
    ) -> Self {
        Self {
            retriever,
            completer,
            chat_model,
            temperature,
        }
    }

    /// Answer a question with reading-location guidance.
    ///
    /// When `show_context` is set, the context returned to the caller comes
    /// from its own retrieval, independent of the one grounding the model.
    /// Any upstream failure aborts the whole query; no retry, no partial
    /// result.
    pub async fn answer(
        &self,
        question: &str,
        show_context: bool,
    ) -> Result<QueryOutcome, ApiError> {
        let context_for_caller = if show_context {
            Some(self.formatted_context(question).await?)
        } else {
            None
        };

        let context = self.formatted_context(question).await?;
        let prompt = compose_prompt(&context, question);

        tracing::debug!(
            "Composed prompt ({} chars) for question ({} chars), show_context={}",
            prompt.len(),
            question.len(),
            show_context
        );

        let request =
            ChatRequest::new(vec![ChatMessage::user(prompt)]).with_temperature(self.temperature);
        let answer = self.completer.chat(request, &self.chat_model).await?;

        Ok(QueryOutcome {
            answer,
            context: context_for_caller,
        })
    }

    /// Retrieve and format the context block for one question.
    pub async fn formatted_context(&self, question: &str) -> Result<String, ApiError> {
        let passages = self.retriever.retrieve(question).await?;
        Ok(format_context(&passages))
    }
}
