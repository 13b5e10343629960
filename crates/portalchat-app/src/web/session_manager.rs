use chrono::{DateTime, Utc};
use portalchat_llm_api::{LlmClient, ProviderError};
use portalchat_session::{ChatSession, RenderFrame, SessionSettings, TurnError};
use portalchat_types::Message;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::app::start_session;
use crate::config::{ClientBuilder, Profile};
use crate::web::protocol::{SessionConfig, SessionDetails, SessionInfo};

pub type SessionId = Uuid;

/// A failed turn together with the transcript it left behind
#[derive(Debug, Error)]
#[error("{error}")]
pub struct TurnFailure {
    #[source]
    pub error: TurnError,
    pub transcript: Vec<Message>,
}

/// A browser-facing session.
///
/// `chat` is locked for a whole turn, so turns within one session never
/// interleave. Reads are served from `transcript`, a copy refreshed when
/// each turn returns, and never wait on a running completion call.
pub struct WebSession {
    pub id: SessionId,
    pub client: Arc<dyn LlmClient>,
    pub settings: SessionSettings,
    pub created_at: DateTime<Utc>,
    chat: Mutex<ChatSession>,
    transcript: RwLock<Vec<Message>>,
    last_activity: RwLock<DateTime<Utc>>,
    profile: String,
}

impl WebSession {
    /// Run one turn, then refresh the readable transcript
    pub async fn handle_turn(&self, input: &str) -> Result<RenderFrame, TurnFailure> {
        let mut chat = self.chat.lock().await;
        let result = chat.handle_turn(self.client.as_ref(), input).await;
        let transcript = chat.render();
        *self.transcript.write().await = transcript.clone();
        drop(chat);
        self.update_activity().await;

        result.map_err(|error| TurnFailure { error, transcript })
    }

    pub async fn update_activity(&self) {
        *self.last_activity.write().await = Utc::now();
    }

    /// Transcript as of the last finished turn
    pub async fn transcript(&self) -> Vec<Message> {
        self.transcript.read().await.clone()
    }

    pub async fn get_info(&self) -> SessionInfo {
        let message_count = self.transcript.read().await.len();
        SessionInfo {
            id: self.id,
            profile: self.profile.clone(),
            model: self.settings.model.clone(),
            created_at: self.created_at.to_rfc3339(),
            last_activity: self.last_activity.read().await.to_rfc3339(),
            message_count,
        }
    }

    pub async fn get_details(&self) -> SessionDetails {
        SessionDetails {
            info: self.get_info().await,
            transcript: self.transcript().await,
        }
    }

    /// Flush the session log once any running turn has finished
    async fn close(&self) {
        self.chat.lock().await.close().await;
    }
}

/// Manages all active sessions
pub struct SessionManager {
    sessions: RwLock<HashMap<SessionId, Arc<WebSession>>>,
    profile: Arc<Profile>,
    client_builder: ClientBuilder,
    temperature: Option<f32>,
    log_dir: Option<PathBuf>,
}

impl SessionManager {
    pub fn new(profile: Profile, client_builder: ClientBuilder, log_dir: Option<PathBuf>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            profile: Arc::new(profile),
            client_builder,
            temperature: None,
            log_dir,
        }
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Create a new session with a fresh, empty transcript
    pub async fn create_session(
        &self,
        config: SessionConfig,
    ) -> Result<Arc<WebSession>, ProviderError> {
        let client = (self.client_builder)(config.model.as_deref())?;
        let settings = SessionSettings::new(client.model())
            .with_memory_length(self.profile.memory_length)
            .with_temperature(self.temperature);
        let chat = start_session(&self.profile, settings.clone(), self.log_dir.as_deref()).await;

        let session = Arc::new(WebSession {
            id: chat.id(),
            created_at: chat.created_at(),
            chat: Mutex::new(chat),
            client,
            settings,
            transcript: RwLock::new(Vec::new()),
            last_activity: RwLock::new(Utc::now()),
            profile: self.profile.name.clone(),
        });

        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());
        log::info!("web session {} created ({})", session.id, session.settings.model);

        Ok(session)
    }

    /// Get a session by ID
    pub async fn get_session(&self, session_id: &SessionId) -> Option<Arc<WebSession>> {
        self.sessions.read().await.get(session_id).cloned()
    }

    /// List all active sessions, most recently active first
    pub async fn list_sessions(&self) -> Vec<SessionInfo> {
        let sessions: Vec<_> = self.sessions.read().await.values().cloned().collect();
        let mut infos = Vec::with_capacity(sessions.len());

        for session in sessions {
            infos.push(session.get_info().await);
        }

        infos.sort_by(|a, b| b.last_activity.cmp(&a.last_activity));
        infos
    }

    /// Remove a session, discarding its transcript. Returns false if unknown.
    ///
    /// The log is flushed in the background so removal does not wait for a
    /// turn still in flight.
    pub async fn remove_session(&self, session_id: &SessionId) -> bool {
        let removed = self.sessions.write().await.remove(session_id);
        match removed {
            Some(session) => {
                tokio::spawn(async move { session.close().await });
                log::info!("web session {} closed", session_id);
                true
            }
            None => false,
        }
    }
}
