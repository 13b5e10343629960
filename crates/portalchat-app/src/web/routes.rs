use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use portalchat_types::Message;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use thiserror::Error;

use crate::web::{
    protocol::{ProfileInfo, SendMessage, SessionConfig, SessionCreated, SessionDetails},
    session_manager::{SessionId, SessionManager, TurnFailure, WebSession},
};

/// Application state shared across routes
#[derive(Clone)]
pub struct AppState {
    pub session_manager: Arc<SessionManager>,
}

/// Create router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/profile", get(get_profile))
        .route("/api/sessions", get(list_sessions).post(create_session))
        .route(
            "/api/sessions/:id",
            get(get_session_details).delete(close_session),
        )
        .route("/api/sessions/:id/messages", post(send_message))
        .route("/api/sessions/:id/starters/:n", post(send_starter))
        .with_state(state)
}

/// GET /api/profile - Header and starters
async fn get_profile(State(state): State<AppState>) -> Json<ProfileInfo> {
    Json(ProfileInfo::from(state.session_manager.profile()))
}

/// GET /api/sessions - List all active sessions
async fn list_sessions(State(state): State<AppState>) -> Json<serde_json::Value> {
    let sessions = state.session_manager.list_sessions().await;
    Json(serde_json::json!({ "sessions": sessions }))
}

/// POST /api/sessions - Create a new session; the body is optional
async fn create_session(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SessionCreated>, AppError> {
    let config: SessionConfig = if body.iter().all(u8::is_ascii_whitespace) {
        SessionConfig::default()
    } else {
        decode_json(&body)?
    };

    let session = state
        .session_manager
        .create_session(config)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(SessionCreated {
        session_id: session.id,
        created_at: session.created_at.to_rfc3339(),
        model: session.settings.model.clone(),
    }))
}

/// GET /api/sessions/:id - Session info and full transcript
async fn get_session_details(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> Result<Json<SessionDetails>, AppError> {
    let session = find_session(&state, &id).await?;
    Ok(Json(session.get_details().await))
}

/// DELETE /api/sessions/:id - Close a session
async fn close_session(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !state.session_manager.remove_session(&id).await {
        return Err(session_not_found(&id));
    }

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Session closed successfully",
    })))
}

/// POST /api/sessions/:id/messages - Run one turn
async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
    body: Bytes,
) -> Result<Response, AppError> {
    let session = find_session(&state, &id).await?;
    let payload: SendMessage = decode_json(&body)?;
    run_turn(&session, &payload.content).await
}

/// POST /api/sessions/:id/starters/:n - Run one turn with starter `n` (1-based)
async fn send_starter(
    State(state): State<AppState>,
    Path((id, n)): Path<(SessionId, usize)>,
) -> Result<Response, AppError> {
    let session = find_session(&state, &id).await?;
    let starter = state
        .session_manager
        .profile()
        .starter(n)
        .map(str::to_string)
        .ok_or_else(|| AppError::NotFound(format!("Starter {} not found", n)))?;
    run_turn(&session, &starter).await
}

async fn find_session(state: &AppState, id: &SessionId) -> Result<Arc<WebSession>, AppError> {
    state
        .session_manager
        .get_session(id)
        .await
        .ok_or_else(|| session_not_found(id))
}

fn session_not_found(id: &SessionId) -> AppError {
    AppError::NotFound(format!("Session {} not found", id))
}

/// Decode a JSON body, rejecting it with the same error shape as every route
fn decode_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))
}

async fn run_turn(session: &WebSession, input: &str) -> Result<Response, AppError> {
    let frame = session.handle_turn(input).await?;
    Ok(Json(frame).into_response())
}

/// Route error, rendered as `{"error", "status"}` JSON
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    /// The turn failed upstream; the transcript still holds the user message
    #[error("{message}")]
    Provider {
        message: String,
        transcript: Vec<Message>,
    },
    #[error("{0}")]
    Internal(String),
}

impl From<TurnFailure> for AppError {
    fn from(failure: TurnFailure) -> Self {
        AppError::Provider {
            message: failure.error.to_string(),
            transcript: failure.transcript,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Provider { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let mut body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });
        if let AppError::Provider { transcript, .. } = self {
            body["transcript"] = serde_json::json!(transcript);
        }

        (status, Json(body)).into_response()
    }
}
