use portalchat_types::{Message, Role};
use serde::Serialize;

/// Ordered, append-only history of one session.
///
/// Entries are never mutated or removed; the transcript lives exactly as long
/// as the session that owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one message at the tail. Content is not validated.
    ///
    /// Only user and assistant entries belong here; the system instruction
    /// is held by the session and prepended per request.
    pub fn append(&mut self, role: Role, content: impl Into<String>) -> &Message {
        self.push(Message::new(role, content))
    }

    pub fn push(&mut self, message: Message) -> &Message {
        debug_assert_ne!(
            message.role(),
            Role::System,
            "system instructions are not transcript entries"
        );
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    /// The last `min(k, len)` messages, oldest first.
    ///
    /// The result borrows the transcript's tail, so it is always a
    /// contiguous suffix and reflects the transcript at call time.
    pub fn recent_window(&self, k: usize) -> &[Message] {
        let start = self.messages.len().saturating_sub(k);
        &self.messages[start..]
    }

    pub fn full_transcript(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
