//! portalchat application: CLI, configuration, profiles, and the two UI
//! layers (terminal REPL and JSON web server) driving a chat session.

pub mod app;
pub mod cli;
pub mod config;
pub mod web;


pub use cli::Cli;
pub use config::{setup_from_cli, AppConfig, ClientBuilder, ConfigFile, Profile};
