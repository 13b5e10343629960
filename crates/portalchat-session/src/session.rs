use chrono::{DateTime, Utc};
use portalchat_llm_api::{LlmClient, ProviderError, TokenUsage};
use portalchat_logging::ConversationLogger;
use portalchat_types::{Message, Role, DEFAULT_MEMORY_LENGTH, DEFAULT_MODEL};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::prompt::PromptTemplate;
use crate::system_prompt::SystemPrompt;
use crate::transcript::Transcript;

/// Number of transcript messages sent for a memory length counted in
/// user/assistant exchanges
pub fn window_size(memory_length: usize) -> usize {
    memory_length.saturating_mul(2)
}

/// What the UI layer renders after a turn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    pub reply: Message,
    pub transcript: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
}

/// Per-session model parameters, fixed when the session starts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSettings {
    pub model: String,
    /// Past user/assistant exchanges sent with each request
    pub memory_length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl SessionSettings {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            memory_length: DEFAULT_MEMORY_LENGTH,
            temperature: None,
        }
    }

    pub fn with_memory_length(mut self, memory_length: usize) -> Self {
        self.memory_length = memory_length;
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Messages of history sent with each request
    pub fn window_size(&self) -> usize {
        window_size(self.memory_length)
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}

#[derive(Debug, Error)]
pub enum TurnError {
    /// The user message stays in the transcript; no reply was recorded
    #[error("completion request failed: {0}")]
    Provider(#[from] ProviderError),
}

/// One interactive session: owns its transcript exclusively.
pub struct ChatSession {
    id: Uuid,
    created_at: DateTime<Utc>,
    system_prompt: SystemPrompt,
    settings: SessionSettings,
    transcript: Transcript,
    total_tokens: u64,
    logger: Option<ConversationLogger>,
}

impl ChatSession {
    pub fn new(system_prompt: SystemPrompt) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            system_prompt,
            settings: SessionSettings::default(),
            transcript: Transcript::new(),
            total_tokens: 0,
            logger: None,
        }
    }

    pub fn with_settings(mut self, settings: SessionSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Exchanges (user + assistant pairs) of history sent with each request
    pub fn with_memory_length(mut self, memory_length: usize) -> Self {
        self.settings.memory_length = memory_length;
        self
    }

    pub fn with_logger(mut self, logger: ConversationLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn system_prompt(&self) -> &SystemPrompt {
        &self.system_prompt
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn memory_length(&self) -> usize {
        self.settings.memory_length
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    /// Messages that would be sent if `input` were submitted now
    pub fn build_request(&self, input: &str) -> Vec<Message> {
        let history = self.transcript.recent_window(self.settings.window_size());
        PromptTemplate::new(self.system_prompt.text()).render(history, input)
    }

    /// Run one request/response cycle for a user action.
    ///
    /// The user message is recorded before the provider is called, so it
    /// survives a failed request.
    pub async fn handle_turn(
        &mut self,
        client: &dyn LlmClient,
        input: &str,
    ) -> Result<RenderFrame, TurnError> {
        let request = self.build_request(input);
        self.record(Role::User, input, None).await;

        let response = match client.chat(&request).await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("session {}: provider call failed: {}", self.id, e);
                return Err(e.into());
            }
        };

        if let Some(usage) = response.usage {
            self.total_tokens = self.total_tokens.saturating_add(usage.total_tokens);
        }
        let reply = self
            .record(
                Role::Assistant,
                response.message.content(),
                Some(client.model()),
            )
            .await;

        Ok(RenderFrame {
            reply,
            transcript: self.render(),
            usage: response.usage,
        })
    }

    /// Full transcript snapshot, as carried by [`RenderFrame::transcript`];
    /// used when a UI attaches to an existing session
    pub fn render(&self) -> Vec<Message> {
        self.transcript.full_transcript().to_vec()
    }

    /// End the session, flushing and detaching its log
    pub async fn close(&mut self) {
        if let Some(mut logger) = self.logger.take() {
            logger.shutdown().await;
        }
    }

    async fn record(&mut self, role: Role, content: &str, model: Option<&str>) -> Message {
        let message = self.transcript.append(role, content).clone();
        if let Some(logger) = &mut self.logger {
            logger.log(self.id, role.as_str(), content, model).await;
        }
        message
    }
}
