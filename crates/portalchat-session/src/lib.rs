//! Conversation management for portalchat
//!
//! This crate owns the per-session transcript, the bounded window of recent
//! messages sent with each request, the system instruction, and the explicit
//! per-turn handler that ties them to a completion provider.

pub mod prompt;
pub mod session;
pub mod system_prompt;
pub mod transcript;

#[cfg(test)]
mod tests;

pub use prompt::PromptTemplate;
pub use session::{window_size, ChatSession, RenderFrame, SessionSettings, TurnError};
pub use system_prompt::{PromptOrigin, PromptSource, SystemPrompt};
pub use transcript::Transcript;
