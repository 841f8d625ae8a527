use crate::common::Message;

/// Local conversation state: the message list and the draft being typed.
#[derive(Debug, Default)]
pub struct ConversationState {
    pub messages: Vec<Message>,
    pub draft: String,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits the draft as a user message and hands back the raw text.
    ///
    /// Blank drafts are left untouched and yield `None`.
    pub fn take_draft(&mut self) -> Option<String> {
        if self.draft.trim().is_empty() {
            return None;
        }

        let prompt = std::mem::take(&mut self.draft);
        self.messages.push(Message::user(prompt.clone()));
        Some(prompt)
    }

    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }
}
