use anyhow::{Context, Result};
use portalchat_session::PromptSource;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::config::profile::Profile;

/// Optional TOML overrides, e.g.
///
/// ```toml
/// profile = "parent-portal"
/// model = "llama-3.3-70b-versatile"
/// memory_length = 5
/// system_prompt_file = "prompts/portal.txt"
/// starters = ["How do trials work?"]
/// ```
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub profile: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub input_placeholder: Option<String>,
    pub model: Option<String>,
    pub backend: Option<String>,
    pub api_url: Option<String>,
    pub memory_length: Option<usize>,
    pub temperature: Option<f32>,
    /// Inline instruction text
    pub system_prompt: Option<String>,
    /// Takes precedence over `system_prompt`
    pub system_prompt_file: Option<PathBuf>,
    pub starters: Option<Vec<String>>,
    pub log_dir: Option<PathBuf>,
}

impl ConfigFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Overwrite the profile fields this file sets
    pub fn apply_to(&self, profile: &mut Profile) {
        if let Some(title) = &self.title {
            profile.title = title.clone();
        }
        if let Some(subtitle) = &self.subtitle {
            profile.subtitle = subtitle.clone();
        }
        if let Some(placeholder) = &self.input_placeholder {
            profile.input_placeholder = placeholder.clone();
        }
        if let Some(model) = &self.model {
            profile.model = model.clone();
        }
        if let Some(memory_length) = self.memory_length {
            profile.memory_length = memory_length;
        }
        if let Some(path) = &self.system_prompt_file {
            profile.system_prompt = PromptSource::File(path.clone());
        } else if let Some(text) = &self.system_prompt {
            profile.system_prompt = PromptSource::Inline(text.clone());
        }
        if let Some(starters) = &self.starters {
            profile.starters = starters.clone();
        }
    }
}
