use async_trait::async_trait;
use portalchat_logging::{log_request, log_response};
use portalchat_types::Message;
use reqwest::header::RETRY_AFTER;

use crate::client::{LlmClient, LlmResponse, TokenUsage};
use crate::error::ProviderError;
use crate::models::{ChatRequest, ChatResponse};

/// Client for any endpoint speaking the OpenAI chat-completions format
/// (Groq, OpenAI, llama.cpp server)
pub struct OpenAiCompatClient {
    api_key: String,
    model: String,
    api_url: String,
    temperature: Option<f32>,
    verbose: bool,
    client: reqwest::Client,
}

impl OpenAiCompatClient {
    /// `api_url` is the full completions URL. An empty `api_key` sends no
    /// Authorization header.
    pub fn new(api_key: String, model: String, api_url: String) -> Self {
        Self {
            api_key,
            model,
            api_url,
            temperature: None,
            verbose: false,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl LlmClient for OpenAiCompatClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn chat(&self, messages: &[Message]) -> Result<LlmResponse, ProviderError> {
        let request = ChatRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            max_tokens: None,
        };

        log_request(&self.api_url, &request, &self.api_key, self.verbose);

        let mut builder = self
            .client
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .json(&request);
        if !self.api_key.is_empty() {
            builder = builder.bearer_auth(&self.api_key);
        }

        let response = builder.send().await?;
        let status = response.status();
        let retry_after_secs = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());
        let body = response.text().await?;

        log_response(status.as_u16(), &body, self.verbose);

        if !status.is_success() {
            log::debug!("{} answered {} for model {}", self.api_url, status, self.model);
            return Err(ProviderError::from_status(
                status.as_u16(),
                retry_after_secs,
                body,
            ));
        }

        let chat_response: ChatResponse = serde_json::from_str(&body)?;
        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or(ProviderError::EmptyResponse)?;

        Ok(LlmResponse {
            message: Message::assistant(choice.message.into_content()),
            usage: chat_response.usage.map(|usage| TokenUsage {
                prompt_tokens: usage.prompt_tokens,
                completion_tokens: usage.completion_tokens,
                total_tokens: usage.total_tokens,
            }),
        })
    }
}
