use std::env;
use std::sync::Arc;

use crate::client::{openai_compat::OpenAiCompatClient, LlmClient};
use crate::config::{get_default_url_for_backend, normalize_api_url, BackendType, ClientConfig};
use crate::error::ProviderError;

/// Client factory for creating LLM clients
pub struct ClientFactory;

impl ClientFactory {
    /// Create an LLM client, reading missing API keys from the environment
    pub fn create(config: &ClientConfig) -> Result<Arc<dyn LlmClient>, ProviderError> {
        Self::create_with_lookup(config, |var| env::var(var).ok())
    }

    /// Create an LLM client, resolving missing API keys through `lookup`
    ///
    /// # Errors
    /// * [`ProviderError::MissingApiUrl`] for llama.cpp without a URL
    /// * [`ProviderError::MissingApiKey`] for Groq/OpenAI without a key
    pub fn create_with_lookup<F>(
        config: &ClientConfig,
        lookup: F,
    ) -> Result<Arc<dyn LlmClient>, ProviderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = config.backend;

        let url = match config.api_url.as_deref() {
            Some(url) => normalize_api_url(url),
            None => get_default_url_for_backend(&backend).ok_or(ProviderError::MissingApiUrl {
                backend: backend.as_str(),
            })?,
        };

        let key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| backend.api_key_env().and_then(&lookup))
            .filter(|k| !k.is_empty());

        let key = match (backend, key) {
            (_, Some(key)) => key,
            (BackendType::Llama, None) => String::new(),
            (_, None) => {
                return Err(ProviderError::MissingApiKey {
                    backend: backend.as_str(),
                    env_var: backend.api_key_env().unwrap_or("API_KEY"),
                })
            }
        };

        log::debug!("creating {} client for model {} at {}", backend, config.model, url);

        Ok(Arc::new(
            OpenAiCompatClient::new(key, config.model.clone(), url)
                .with_temperature(config.temperature)
                .with_verbose(config.verbose),
        ))
    }
}
