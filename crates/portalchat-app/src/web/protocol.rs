use portalchat_types::Message;
use serde::{Deserialize, Serialize};

use crate::config::Profile;
use crate::web::session_manager::SessionId;

/// Body of `POST /api/sessions`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Overrides the configured model for this session only
    #[serde(default)]
    pub model: Option<String>,
}

/// Body of `POST /api/sessions/:id/messages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessage {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub id: SessionId,
    pub profile: String,
    pub model: String,
    pub created_at: String,
    pub last_activity: String,
    pub message_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDetails {
    #[serde(flatten)]
    pub info: SessionInfo,
    pub transcript: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCreated {
    pub session_id: SessionId,
    pub created_at: String,
    pub model: String,
}

/// Header and starters a frontend shows before the first turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileInfo {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub input_placeholder: String,
    pub starters: Vec<String>,
}

impl From<&Profile> for ProfileInfo {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            title: profile.title.clone(),
            subtitle: profile.subtitle.clone(),
            input_placeholder: profile.input_placeholder.clone(),
            starters: profile.starters.clone(),
        }
    }
}
