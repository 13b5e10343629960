use async_trait::async_trait;
use portalchat_types::Message;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

pub mod openai_compat;

/// LLM client trait - unified interface for all completion providers
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Model identifier sent with every request
    fn model(&self) -> &str;

    /// Send an ordered, role-tagged message list and return the reply
    async fn chat(&self, messages: &[Message]) -> Result<LlmResponse, ProviderError>;

    /// Like [`LlmClient::chat`], keeping only the reply text
    async fn chat_completion(&self, messages: &[Message]) -> Result<String, ProviderError> {
        Ok(self.chat(messages).await?.message.into_content())
    }
}

/// LLM response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    pub message: Message,
    pub usage: Option<TokenUsage>,
}

/// Token usage information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}
