//! Chat-completion backends.

pub mod mock;
pub mod openai;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{LlmProvider, Settings};
use crate::error::Result;

/// One system + user exchange sent to a chat-completion model.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Returns the assistant's reply text. Provider failures surface as
    /// [`crate::AppError::External`] carrying the provider's error code.
    async fn complete(&self, request: ChatRequest) -> Result<String>;
}

/// Builds the backend selected by `llm_provider`.
pub fn from_settings(settings: &Settings) -> Result<Arc<dyn ChatBackend>> {
    let backend: Arc<dyn ChatBackend> = match settings.llm_provider {
        LlmProvider::OpenAi => Arc::new(openai::OpenAiClient::from_settings(settings)?),
        LlmProvider::Mock => {
            tracing::warn!("using the mock chat backend; replies are canned");
            Arc::new(mock::MockChatClient::default())
        }
    };
    Ok(backend)
}
