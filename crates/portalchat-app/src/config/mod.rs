use anyhow::{bail, Context, Result};
use portalchat_llm_api::{
    detect_backend, parse_model_spec, BackendType, ClientConfig, ClientFactory, LlmClient,
    ProviderError,
};
use portalchat_session::PromptSource;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::Cli;

pub mod file;
pub mod profile;

pub use file::ConfigFile;
pub use profile::{Profile, PROFILE_NAMES};

/// Builds the provider client for a session; `Some(model)` overrides the
/// configured model
pub type ClientBuilder =
    Arc<dyn Fn(Option<&str>) -> Result<Arc<dyn LlmClient>, ProviderError> + Send + Sync>;

/// Application configuration derived from CLI arguments, environment and config file
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub profile: Profile,
    pub client_config: ClientConfig,
    pub log_dir: Option<PathBuf>,
    pub web_addr: SocketAddr,
}

impl AppConfig {
    pub fn client_builder(&self) -> ClientBuilder {
        let base = self.client_config.clone();
        Arc::new(move |model: Option<&str>| match model {
            Some(model) => ClientFactory::create(&base.for_model(model)),
            None => ClientFactory::create(&base),
        })
    }
}

/// Set up application configuration from CLI arguments
pub fn setup_from_cli(cli: &Cli) -> Result<AppConfig> {
    let file = match &cli.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    resolve(cli, &file)
}

/// Precedence: CLI flags (and their env vars) > config file > profile defaults
pub fn resolve(cli: &Cli, file: &ConfigFile) -> Result<AppConfig> {
    let profile_name = cli
        .profile
        .as_deref()
        .or(file.profile.as_deref())
        .unwrap_or(profile::PARENT_PORTAL);
    let Some(mut profile) = Profile::builtin(profile_name) else {
        bail!(
            "Unknown profile '{}'. Available profiles: {}",
            profile_name,
            PROFILE_NAMES.join(", ")
        );
    };
    file.apply_to(&mut profile);

    if let Some(memory_length) = cli.memory_length {
        profile.memory_length = memory_length;
    }
    if let Some(path) = &cli.system_prompt_file {
        profile.system_prompt = PromptSource::File(path.clone());
    }

    let model_spec = cli.model.clone().unwrap_or_else(|| profile.model.clone());
    let (model, spec_backend, spec_url) = parse_model_spec(&model_spec);
    if model.is_empty() {
        bail!("Model name must not be empty (got '{}')", model_spec);
    }
    profile.model = model.clone();

    let explicit_backend = match cli.backend.as_deref().or(file.backend.as_deref()) {
        Some(name) => Some(BackendType::parse(name).with_context(|| {
            format!("Unknown backend '{}': expected groq, openai or llama", name)
        })?),
        None => None,
    };

    let api_url = cli
        .api_url
        .clone()
        .or(spec_url)
        .or_else(|| file.api_url.clone());

    let backend = explicit_backend
        .or(spec_backend)
        .or_else(|| api_url.as_deref().map(detect_backend))
        .unwrap_or(BackendType::Groq);

    let mut client_config = ClientConfig::new(backend, model)
        .with_temperature(cli.temperature.or(file.temperature))
        .with_verbose(cli.verbose);
    client_config.api_url = api_url;
    client_config.api_key = cli.api_key.clone();

    let web_addr: SocketAddr = format!("{}:{}", cli.web_bind, cli.web_port)
        .parse()
        .with_context(|| format!("Invalid web bind address {}:{}", cli.web_bind, cli.web_port))?;

    Ok(AppConfig {
        profile,
        client_config,
        log_dir: cli.log_dir.clone().or_else(|| file.log_dir.clone()),
        web_addr,
    })
}
