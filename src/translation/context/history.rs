/*!
 * Conversation history for one translation phase.
 *
 * A history always starts with the phase's system prompt and then grows by
 * whole user/assistant exchanges. It is never truncated in place; see
 * [`super::window`] for the bounded view sent to the model.
 */

use serde::{Deserialize, Serialize};

use crate::providers::{ChatMessage, Role};

/// Role-tagged messages exchanged with the model during one phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationHistory {
    messages: Vec<ChatMessage>,
}

impl ConversationHistory {
    /// Start a history seeded with the phase's system prompt.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::system(system_prompt)],
        }
    }

    /// The system prompt this history was seeded with.
    pub fn system_prompt(&self) -> &str {
        &self.messages[0].content
    }

    /// The system message at position 0.
    pub fn system_message(&self) -> &ChatMessage {
        &self.messages[0]
    }

    /// All messages, system message first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Total number of messages including the system message.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether no exchange has happened yet.
    pub fn is_empty(&self) -> bool {
        self.messages.len() == 1
    }

    /// Number of user messages recorded.
    pub fn turns(&self) -> usize {
        self.messages.iter().filter(|m| m.role == Role::User).count()
    }

    /// Append a user message.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::user(content));
    }

    /// Append an assistant message.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(content));
    }

    /// Append a complete user/assistant exchange.
    pub fn push_exchange(&mut self, user: impl Into<String>, assistant: impl Into<String>) {
        self.push_user(user);
        self.push_assistant(assistant);
    }
}
