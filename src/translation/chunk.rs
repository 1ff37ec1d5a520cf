/*!
 * Translation of a single chunk against one phase's conversation.
 *
 * `ChunkTranslator` owns the model settings; the conversation history is an
 * owned value threaded through each call, so a phase's history can never be
 * touched by two requests at once.
 */

use std::sync::Arc;

use crate::app_config::ModelConfig;
use crate::errors::ProviderError;
use crate::logging::LogContext;
use crate::providers::{ChatProvider, CompletionRequest};
use crate::text::clean_translation;

use super::context::{window, ConversationHistory};
use super::guard::is_lone_quote;

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Sampling temperature used when none is configured
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Exchanges of earlier context sent with each request by default
pub const DEFAULT_MAX_CONTEXT: usize = 2;

/// Translates one text unit at a time, keeping a bounded conversation.
#[derive(Debug, Clone)]
pub struct ChunkTranslator {
    /// Model client
    provider: Arc<dyn ChatProvider>,
    /// Model identifier passed with every request
    model: String,
    /// Sampling temperature
    temperature: f32,
    /// Previous exchanges included in each request
    max_context: usize,
    /// Where log records go
    log: LogContext,
}

impl ChunkTranslator {
    /// Create a translator with default temperature and context size.
    pub fn new(provider: Arc<dyn ChatProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_context: DEFAULT_MAX_CONTEXT,
            log: LogContext::default().child("chunk"),
        }
    }

    /// Create a translator from the model section of the configuration.
    pub fn from_config(provider: Arc<dyn ChatProvider>, config: &ModelConfig) -> Self {
        Self::new(provider, config.name.clone())
            .with_temperature(config.temperature)
            .with_max_context(config.max_context)
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set how many previous exchanges each request carries (at least one).
    pub fn with_max_context(mut self, max_context: usize) -> Self {
        self.max_context = max_context.max(1);
        self
    }

    pub fn with_log_context(mut self, log: LogContext) -> Self {
        self.log = log;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn max_context(&self) -> usize {
        self.max_context
    }

    pub fn log_context(&self) -> &LogContext {
        &self.log
    }

    /// Translate `text` within the conversation `history`.
    ///
    /// Without a history, a new one is seeded with `system_prompt`. Lone
    /// quotation marks are echoed back without a model call, recording the
    /// same text as both sides of the exchange. Otherwise exactly one request
    /// is sent carrying the windowed history; the full history keeps every
    /// message and is returned with the cleaned reply.
    ///
    /// Provider failures are logged and returned unchanged; nothing is
    /// retried here.
    pub async fn translate_chunk(
        &self,
        text: &str,
        system_prompt: &str,
        history: Option<ConversationHistory>,
    ) -> Result<(String, ConversationHistory), ProviderError> {
        let mut history = history.unwrap_or_else(|| ConversationHistory::new(system_prompt));

        if is_lone_quote(text) {
            self.log.info(format!("Detected lone quotation mark {:?}, preserving as is", text));
            history.push_exchange(text, text);
            return Ok((text.to_string(), history));
        }

        history.push_user(text);
        let messages = window(&history, self.max_context);

        self.log.info(format!(
            "Making API request to {} via {} with {} of {} messages",
            self.model,
            self.provider.name(),
            messages.len(),
            history.len()
        ));

        let request = CompletionRequest::new(self.model.clone(), messages, self.temperature);
        let reply = match self.provider.complete(request).await {
            Ok(reply) => reply.trim().to_string(),
            Err(e) => {
                self.log.error(format!("API request failed: {}", e));
                return Err(e);
            }
        };

        self.log.debug(format!("API request completed, received {} characters", reply.chars().count()));
        history.push_assistant(reply.as_str());

        let cleaned = clean_translation(&reply, text);
        self.log.debug(format!("Cleaned reply is {} characters", cleaned.chars().count()));

        Ok((cleaned, history))
    }
}
