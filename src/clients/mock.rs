//! Deterministic chat backend for local runs and tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ChatBackend, ChatRequest};
use crate::error::{AppError, ProviderError, Result};

const CANNED_REPLY: &str = "1. Stop scrolling: this changes everything.\n\
                            2. Nobody tells you this about your morning routine.\n\
                            3. I tried it for 30 days so you don't have to.\n\
                            4. The mistake 9 out of 10 people make.\n\
                            5. Watch this before you buy anything else.";

/// Only the most recent requests are kept, so a long-running mock
/// deployment stays bounded.
pub const MAX_RECORDED_CALLS: usize = 32;

pub struct MockChatClient {
    reply: std::result::Result<String, ProviderError>,
    calls: Mutex<VecDeque<ChatRequest>>,
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::replying(CANNED_REPLY)
    }
}

impl MockChatClient {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self { reply: Ok(reply.into()), calls: Mutex::new(VecDeque::new()) }
    }

    pub fn failing(code: &str, message: &str) -> Self {
        Self {
            reply: Err(ProviderError::new(Some(code.to_string()), message)),
            calls: Mutex::new(VecDeque::new()),
        }
    }

    /// Recent requests, oldest first, at most [`MAX_RECORDED_CALLS`].
    pub fn calls(&self) -> Vec<ChatRequest> {
        self.calls
            .lock()
            .map(|calls| calls.iter().cloned().collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ChatBackend for MockChatClient {
    async fn complete(&self, request: ChatRequest) -> Result<String> {
        if let Ok(mut calls) = self.calls.lock() {
            if calls.len() == MAX_RECORDED_CALLS {
                calls.pop_front();
            }
            calls.push_back(request);
        }
        self.reply.clone().map_err(AppError::External)
    }
}
