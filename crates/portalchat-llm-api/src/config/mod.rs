use std::fmt;

pub mod factory;
pub use factory::ClientFactory;

/// Backend type for completion providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    Groq,
    OpenAI,
    Llama,
}

impl BackendType {
    /// Parse backend type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "groq" => Some(Self::Groq),
            "openai" => Some(Self::OpenAI),
            "llama" | "llamacpp" | "llama.cpp" | "llama-cpp" => Some(Self::Llama),
            _ => None,
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Groq => "groq",
            Self::OpenAI => "openai",
            Self::Llama => "llama",
        }
    }

    /// Environment variable holding the API key, if the backend needs one
    pub fn api_key_env(&self) -> Option<&'static str> {
        match self {
            Self::Groq => Some("GROQ_API_KEY"),
            Self::OpenAI => Some("OPENAI_API_KEY"),
            Self::Llama => None,
        }
    }
}

impl fmt::Display for BackendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default Groq API URL
pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default OpenAI API URL
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Get the default URL for a given backend type
pub fn get_default_url_for_backend(backend: &BackendType) -> Option<String> {
    match backend {
        BackendType::Groq => Some(GROQ_API_URL.to_string()),
        BackendType::OpenAI => Some(OPENAI_API_URL.to_string()),
        BackendType::Llama => None, // llama.cpp has no default URL
    }
}

/// Guess the backend from an API URL
pub fn detect_backend(url: &str) -> BackendType {
    if url.contains("groq.com") {
        BackendType::Groq
    } else if url.contains("openai.com") {
        BackendType::OpenAI
    } else {
        BackendType::Llama
    }
}

/// Parse a model string in format "model@backend(api_url)", "model@backend" or "model".
/// Returns (model_name, backend, api_url)
pub fn parse_model_spec(spec: &str) -> (String, Option<BackendType>, Option<String>) {
    let Some((model, backend_part)) = spec.split_once('@') else {
        return (spec.to_string(), None, None);
    };

    match backend_part.split_once('(') {
        Some((backend_name, rest)) => {
            let url = rest.strip_suffix(')').unwrap_or(rest);
            let api_url = (!url.is_empty()).then(|| url.to_string());
            (model.to_string(), BackendType::parse(backend_name), api_url)
        }
        None => (model.to_string(), BackendType::parse(backend_part), None),
    }
}

/// Normalize API URL by ensuring it has the correct path for OpenAI-compatible endpoints
pub fn normalize_api_url(url: &str) -> String {
    // If URL already contains a path with "completions", use it as-is
    if url.contains("/completions") || url.contains("/chat") {
        return url.to_string();
    }

    if url.ends_with('/') {
        format!("{}v1/chat/completions", url)
    } else {
        format!("{}/v1/chat/completions", url)
    }
}

/// Everything needed to build a provider client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub backend: BackendType,
    pub model: String,
    /// Explicit key; falls back to the backend's environment variable
    pub api_key: Option<String>,
    /// Custom URL; falls back to the backend default
    pub api_url: Option<String>,
    pub temperature: Option<f32>,
    /// Dump requests and responses to the console
    pub verbose: bool,
}

impl ClientConfig {
    pub fn new(backend: BackendType, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
            api_key: None,
            api_url: None,
            temperature: None,
            verbose: false,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Same settings, different model
    pub fn for_model(&self, model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..self.clone()
        }
    }
}
