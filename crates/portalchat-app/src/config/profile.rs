use portalchat_session::PromptSource;
use portalchat_types::{DEFAULT_MEMORY_LENGTH, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT_FILE};

pub const PARENT_PORTAL: &str = "parent-portal";
pub const INTERVIEWER: &str = "interviewer";

/// Names accepted by [`Profile::builtin`]
pub const PROFILE_NAMES: &[&str] = &[PARENT_PORTAL, INTERVIEWER];

const INTERVIEWER_PROMPT: &str = "\
You are an AI-based interviewer designed to provide a concise and structured interview experience.

Focus on both technical knowledge and soft skills, but ensure your responses are brief and to the point.

Do not provide lengthy explanations or unnecessary information.

After the final question, provide a short assessment of the user's performance, highlighting strengths and areas for improvement. Offer specific, constructive feedback and suggest resources for further practice in a summarized manner. Conclude with a short, motivational message, encouraging the user to continue improving.

Throughout the process, keep your responses clear, concise, and focused on the next step.";

/// A branded chat application: header, model, instruction and starters
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub input_placeholder: String,
    pub model: String,
    /// Past user/assistant exchanges sent with each request
    pub memory_length: usize,
    pub system_prompt: PromptSource,
    /// Canned questions a user can submit with one action
    pub starters: Vec<String>,
}

impl Profile {
    pub fn parent_portal() -> Self {
        Self {
            name: PARENT_PORTAL.to_string(),
            title: "KNVB Parent Portal".to_string(),
            subtitle: "Helping parents navigate agents, clubs, and their children's journey \
                       to becoming professional footballers."
                .to_string(),
            input_placeholder: "Ask me anything about your child's football development..."
                .to_string(),
            model: DEFAULT_MODEL.to_string(),
            memory_length: DEFAULT_MEMORY_LENGTH,
            system_prompt: PromptSource::File(DEFAULT_SYSTEM_PROMPT_FILE.into()),
            starters: vec![
                "How do I find the right agent for my child?".to_string(),
                "What clubs are best for young players?".to_string(),
                "How can I manage my child's training schedule?".to_string(),
            ],
        }
    }

    pub fn interviewer() -> Self {
        Self {
            name: INTERVIEWER.to_string(),
            title: "Jumpstart".to_string(),
            subtitle: "The startup career accelerator. Founders pitch their jobs to you. \
                       Land a high-growth startup role. Accelerate your startup career."
                .to_string(),
            input_placeholder: "Ask me anything about startup careers...".to_string(),
            model: "llama3-8b-8192".to_string(),
            memory_length: DEFAULT_MEMORY_LENGTH,
            system_prompt: PromptSource::Inline(INTERVIEWER_PROMPT.to_string()),
            starters: Vec::new(),
        }
    }

    pub fn builtin(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            PARENT_PORTAL | "parent_portal" | "knvb" => Some(Self::parent_portal()),
            INTERVIEWER | "jumpstart" => Some(Self::interviewer()),
            _ => None,
        }
    }

    /// Starter by 1-based position, as shown to the user
    pub fn starter(&self, n: usize) -> Option<&str> {
        n.checked_sub(1)
            .and_then(|i| self.starters.get(i))
            .map(String::as_str)
    }
}
