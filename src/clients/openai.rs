use async_trait::async_trait;
use openai::chat::{ChatCompletion, ChatCompletionMessage, ChatCompletionMessageRole};
use openai::Credentials;

use super::{ChatBackend, ChatRequest};
use crate::config::Settings;
use crate::error::{AppError, ProviderError, Result};

pub struct OpenAiClient {
    creds: Credentials,
    debug_prompts: bool,
}

impl OpenAiClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings
            .api_key()
            .ok_or_else(|| AppError::External(ProviderError::new(None, "Missing OPENAI_API_KEY")))?;
        Ok(Self {
            creds: Credentials::new(api_key, settings.openai_base_url.clone()),
            debug_prompts: settings.debug_prompts,
        })
    }
}

#[async_trait]
impl ChatBackend for OpenAiClient {
    async fn complete(&self, request: ChatRequest) -> Result<String> {
        if self.debug_prompts {
            debug_log_preview(&request.system, &request.user);
        }
        let messages = vec![
            message(ChatCompletionMessageRole::System, request.system),
            message(ChatCompletionMessageRole::User, request.user),
        ];

        let completion_res = ChatCompletion::builder(&request.model, messages)
            .temperature(request.temperature)
            .max_tokens(u64::from(request.max_tokens))
            .credentials(self.creds.clone())
            .create()
            .await;

        match completion_res {
            Ok(resp) => {
                let assistant = resp
                    .choices
                    .first()
                    .and_then(|c| c.message.content.as_ref())
                    .map(|c| c.to_string())
                    .unwrap_or_default();
                Ok(assistant)
            }
            Err(e) => Err(AppError::External(ProviderError::new(e.code.clone(), e.message.clone()))),
        }
    }
}

fn message(role: ChatCompletionMessageRole, content: String) -> ChatCompletionMessage {
    ChatCompletionMessage {
        role,
        content: Some(content),
        name: None,
        function_call: None,
        tool_calls: None,
        tool_call_id: None,
    }
}

fn debug_log_preview(system: &str, user: &str) {
    tracing::debug!(
        system_len = system.len(),
        user_len = user.len(),
        system_preview = %system.chars().take(80).collect::<String>(),
        user_preview = %user.chars().take(80).collect::<String>(),
        "sending chat completion"
    );
}
