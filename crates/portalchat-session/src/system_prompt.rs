use portalchat_types::DEFAULT_SYSTEM_PROMPT;
use std::fs;
use std::path::{Path, PathBuf};

/// Where a session's instruction text is configured to come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptSource {
    File(PathBuf),
    Inline(String),
}

impl PromptSource {
    /// Resolve the instruction text; called once per session start
    pub fn load(&self) -> SystemPrompt {
        match self {
            PromptSource::File(path) => SystemPrompt::from_file(path),
            PromptSource::Inline(text) => SystemPrompt::inline(text.clone()),
        }
    }
}

/// Where a loaded instruction text actually came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOrigin {
    File(PathBuf),
    Inline,
    /// The configured file could not be read
    Default,
}

/// The instruction prepended to every request of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemPrompt {
    text: String,
    origin: PromptOrigin,
}

impl SystemPrompt {
    /// Read and trim the file. Any read failure substitutes
    /// [`DEFAULT_SYSTEM_PROMPT`] verbatim.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => Self {
                text: text.trim().to_string(),
                origin: PromptOrigin::File(path.to_path_buf()),
            },
            Err(e) => {
                log::debug!(
                    "system prompt {} unavailable ({}), using default",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn inline(text: impl Into<String>) -> Self {
        Self {
            text: text.into().trim().to_string(),
            origin: PromptOrigin::Inline,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> &PromptOrigin {
        &self.origin
    }

    pub fn is_default(&self) -> bool {
        self.origin == PromptOrigin::Default
    }
}

impl Default for SystemPrompt {
    fn default() -> Self {
        Self {
            text: DEFAULT_SYSTEM_PROMPT.to_string(),
            origin: PromptOrigin::Default,
        }
    }
}
