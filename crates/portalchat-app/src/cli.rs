use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// CLI arguments for portalchat
#[derive(Parser, Debug)]
#[command(name = "portalchat")]
#[command(about = "Portal Chat - branded chat assistants backed by hosted LLMs")]
#[command(version)]
pub struct Cli {
    /// Built-in application profile (parent-portal, interviewer)
    #[arg(long, env = "PORTALCHAT_PROFILE", value_name = "NAME")]
    pub profile: Option<String>,

    /// TOML file overriding profile settings
    #[arg(long, env = "PORTALCHAT_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Model name, optionally as "model@backend" or "model@backend(url)"
    #[arg(long, env = "PORTALCHAT_MODEL", value_name = "MODEL")]
    pub model: Option<String>,

    /// Backend type (groq, openai, llama)
    #[arg(long, env = "PORTALCHAT_BACKEND", value_name = "BACKEND")]
    pub backend: Option<String>,

    /// Completion endpoint URL (e.g. http://localhost:8080 for llama.cpp)
    #[arg(long, env = "PORTALCHAT_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// API key; defaults to GROQ_API_KEY or OPENAI_API_KEY
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Number of past user/assistant exchanges sent with each request
    #[arg(long, env = "PORTALCHAT_MEMORY_LENGTH", value_name = "N")]
    pub memory_length: Option<usize>,

    /// File holding the system instruction
    #[arg(long, value_name = "PATH")]
    pub system_prompt_file: Option<PathBuf>,

    /// Sampling temperature passed to the provider
    #[arg(long, value_name = "T")]
    pub temperature: Option<f32>,

    /// Directory for JSONL conversation logs
    #[arg(long, env = "PORTALCHAT_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Enable verbose debug output (shows HTTP requests and responses)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Serve the JSON web API instead of the terminal chat
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub web: bool,

    /// Web server port
    #[arg(long, default_value = "8080", env = "PORTALCHAT_WEB_PORT")]
    pub web_port: u16,

    /// Web server bind address
    #[arg(long, default_value = "127.0.0.1", env = "PORTALCHAT_WEB_BIND")]
    pub web_bind: String,

    /// Print the built-in profiles and exit
    #[arg(long)]
    pub list_profiles: bool,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub generate: Option<Shell>,
}
