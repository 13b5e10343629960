use portalchat_types::Message;

/// Request layout: system instruction, history placeholder, human input.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate<'a> {
    system: &'a str,
}

impl<'a> PromptTemplate<'a> {
    pub fn new(system: &'a str) -> Self {
        Self { system }
    }

    /// `[system, history..., user(human_input)]`
    pub fn render(&self, history: &[Message], human_input: &str) -> Vec<Message> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(Message::system(self.system));
        messages.extend_from_slice(history);
        messages.push(Message::user(human_input));
        messages
    }
}
