//! # portalchat-llm-api
//!
//! Client side of the hosted chat-completion providers used by portalchat:
//! - Groq (default)
//! - OpenAI
//! - llama.cpp (self-hosted, OpenAI-compatible)
//!
//! All three speak the OpenAI chat-completions wire format, so a single
//! [`OpenAiCompatClient`] serves them; [`ClientFactory`] picks the URL and
//! credentials for a [`BackendType`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use portalchat_llm_api::{BackendType, ClientConfig, ClientFactory};
//! use portalchat_types::Message;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::new(BackendType::Groq, "llama-3.3-70b-versatile")
//!         .with_api_key("your-api-key");
//!     let client = ClientFactory::create(&config)?;
//!
//!     let reply = client
//!         .chat_completion(&[Message::system("Be brief."), Message::user("Hello!")])
//!         .await?;
//!     println!("Response: {}", reply);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use client::{openai_compat::OpenAiCompatClient, LlmClient, LlmResponse, TokenUsage};
pub use config::{
    detect_backend, get_default_url_for_backend, normalize_api_url, parse_model_spec,
    BackendType, ClientConfig, ClientFactory, GROQ_API_URL, OPENAI_API_URL,
};
pub use error::ProviderError;
