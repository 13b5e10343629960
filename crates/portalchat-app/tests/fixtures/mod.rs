#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use portalchat::config::{ClientBuilder, Profile};
use portalchat::web::routes::{create_router, AppState};
use portalchat::web::SessionManager;
use portalchat_llm_api::{LlmClient, LlmResponse, ProviderError, TokenUsage};
use portalchat_session::PromptSource;
use portalchat_types::Message;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

pub const TEST_PROMPT: &str = "You are a test assistant.";

/// Replays canned replies; `Err(status)` answers with a provider error
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<String, u16>>>,
    pub requests: Mutex<Vec<Vec<Message>>>,
    delay: Option<Duration>,
}

impl ScriptedClient {
    pub fn new(replies: Vec<Result<&str, u16>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().map(|r| r.map(String::from)).collect()),
            requests: Mutex::new(Vec::new()),
            delay: None,
        })
    }

    /// Like [`ScriptedClient::new`], but every reply takes `delay`
    pub fn slow(replies: Vec<Result<&str, u16>>, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().map(|r| r.map(String::from)).collect()),
            requests: Mutex::new(Vec::new()),
            delay: Some(delay),
        })
    }

    pub fn requests(&self) -> Vec<Vec<Message>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for ScriptedClient {
    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn chat(&self, messages: &[Message]) -> Result<LlmResponse, ProviderError> {
        self.requests.lock().unwrap().push(messages.to_vec());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(LlmResponse {
                message: Message::assistant(text),
                usage: Some(TokenUsage {
                    prompt_tokens: 8,
                    completion_tokens: 4,
                    total_tokens: 12,
                }),
            }),
            Some(Err(status)) => Err(ProviderError::from_status(status, None, "boom".into())),
            None => Err(ProviderError::EmptyResponse),
        }
    }
}

/// Parent-portal branding with an inline instruction, so no file is read
pub fn test_profile() -> Profile {
    let mut profile = Profile::parent_portal();
    profile.system_prompt = PromptSource::Inline(TEST_PROMPT.to_string());
    profile
}

pub fn test_router(client: Arc<ScriptedClient>) -> Router {
    let builder: ClientBuilder = Arc::new(move |_model: Option<&str>| {
        let client: Arc<dyn LlmClient> = client.clone();
        Ok(client)
    });
    let manager = Arc::new(SessionManager::new(test_profile(), builder, None));
    create_router(AppState {
        session_manager: manager,
    })
}

/// Send one request and decode the JSON response body
pub async fn call(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}

pub async fn new_session(router: &Router) -> String {
    let (status, body) = call(router, Method::POST, "/api/sessions", None).await;
    assert_eq!(status, StatusCode::OK);
    body["session_id"].as_str().unwrap().to_string()
}
