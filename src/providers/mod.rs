/*!
 * Chat model providers.
 *
 * This module contains the client abstraction the translator talks to:
 * - OpenAI: OpenAI-compatible chat completions API
 * - Mock: scripted provider for tests and dry runs
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

use crate::errors::ProviderError;

/// Role of a message sender in a chat conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        };
        write!(f, "{}", name)
    }
}

/// Chat message object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: Role,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a message with the given role
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// A single completion request: model, messages and sampling temperature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    /// Model identifier
    pub model: String,
    /// Ordered conversation, system message first
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    pub temperature: f32,
}

impl CompletionRequest {
    /// Create a new completion request
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>, temperature: f32) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature,
        }
    }
}

/// Common trait for chat model providers
///
/// The translator treats a provider as opaque: it sends one request and
/// receives either the completion text or an error it passes on untouched.
#[async_trait]
pub trait ChatProvider: Send + Sync + Debug {
    /// Complete a request, returning the text of the first choice
    ///
    /// # Arguments
    /// * `request` - The request to complete
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The completion text or an error
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError>;

    /// Short provider name used in log records
    fn name(&self) -> &str;
}

pub mod mock;
pub mod openai;
