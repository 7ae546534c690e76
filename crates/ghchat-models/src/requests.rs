use serde::Serialize;

use super::types::Message;

/// Chat API request structure
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    pub model: String,
}

impl ChatRequest {
    /// Assemble the outbound payload from the visible conversation.
    ///
    /// The system message is prepended only when the configured prompt
    /// trims non-empty; the conversation slice already ends with the
    /// user message for the current turn.
    pub fn assemble(system_prompt: &str, conversation: &[Message], model: &str) -> Self {
        let prompt = system_prompt.trim();
        let mut messages = Vec::with_capacity(conversation.len() + 1);

        if !prompt.is_empty() {
            messages.push(Message::system(prompt));
        }
        messages.extend_from_slice(conversation);

        Self {
            messages,
            model: model.to_string(),
        }
    }
}
