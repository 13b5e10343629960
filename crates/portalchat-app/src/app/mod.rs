use colored::Colorize;
use portalchat_logging::ConversationLogger;
use portalchat_session::{ChatSession, SessionSettings};
use std::path::Path;

use crate::config::Profile;

pub mod repl;
pub mod web_server;

pub use repl::run_repl_mode;
pub use web_server::run_web_server;

/// Start a fresh session for `profile`: the system instruction is loaded
/// here, once, and kept for the session's lifetime.
pub async fn start_session(
    profile: &Profile,
    settings: SessionSettings,
    log_dir: Option<&Path>,
) -> ChatSession {
    let system_prompt = profile.system_prompt.load();
    let mut session = ChatSession::new(system_prompt).with_settings(settings);

    if let Some(dir) = log_dir {
        match ConversationLogger::new(dir, session.id()).await {
            Ok(logger) => session = session.with_logger(logger),
            Err(e) => eprintln!("{} Logging disabled: {}", "⚠️".yellow(), e),
        }
    }

    log::debug!(
        "session {} started (profile {}, model {}, memory {} exchanges)",
        session.id(),
        profile.name,
        session.settings().model,
        session.memory_length()
    );
    session
}
