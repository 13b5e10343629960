use thiserror::Error;

/// Failure of a completion request. Nothing in this crate retries them.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider rejected credentials ({status}): {body}")]
    Auth { status: u16, body: String },

    #[error("provider rate limit reached: {body}")]
    RateLimited {
        retry_after_secs: Option<u64>,
        body: String,
    },

    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode provider response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("provider returned no choices")]
    EmptyResponse,

    #[error("no API key configured for {backend} (set {env_var} or pass --api-key)")]
    MissingApiKey {
        backend: &'static str,
        env_var: &'static str,
    },

    #[error("{backend} backend requires an API URL")]
    MissingApiUrl { backend: &'static str },
}

impl ProviderError {
    /// Classify a non-success HTTP status
    pub fn from_status(status: u16, retry_after_secs: Option<u64>, body: String) -> Self {
        match status {
            401 | 403 => ProviderError::Auth { status, body },
            429 => ProviderError::RateLimited {
                retry_after_secs,
                body,
            },
            _ => ProviderError::Status { status, body },
        }
    }
}
