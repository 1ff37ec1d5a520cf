/*!
 * Mock provider implementations for testing.
 *
 * This module provides a mock provider that simulates different behaviors:
 * - `MockProvider::echo()` - Replies with the last user message
 * - `MockProvider::working()` - Replies with a tagged translation
 * - `MockProvider::scripted(..)` - Replies from a fixed list, in order
 * - `MockProvider::fail_after(n)` - Succeeds `n` times, then errors
 * - `MockProvider::failing()` - Always fails with an error
 *
 * Every request is recorded so tests can inspect exactly what was sent.
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::providers::{ChatProvider, CompletionRequest, Role};

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Returns the last user message unchanged
    Echo,
    /// Returns `[TRANSLATED] <last user message>`
    Working,
    /// Returns the next scripted reply; errors once the script runs out
    Scripted,
    /// Succeeds (like `Working`) for the first `successes` calls, then errors
    FailAfter { successes: usize },
    /// Always fails with an error
    Failing,
}

/// Mock provider for testing translation behavior
#[derive(Debug, Clone)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Every request received, in order
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
    /// Remaining scripted replies
    script: Arc<Mutex<VecDeque<String>>>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&CompletionRequest) -> String>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            requests: Arc::new(Mutex::new(Vec::new())),
            script: Arc::new(Mutex::new(VecDeque::new())),
            custom_response: None,
        }
    }

    pub fn echo() -> Self {
        Self::new(MockBehavior::Echo)
    }

    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    pub fn fail_after(successes: usize) -> Self {
        Self::new(MockBehavior::FailAfter { successes })
    }

    /// Create a mock that replies with `replies` in order
    pub fn scripted<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let provider = Self::new(MockBehavior::Scripted);
        provider.script.lock().extend(replies.into_iter().map(Into::into));
        provider
    }

    /// Set a custom response generator, used by `Working` and `FailAfter`
    pub fn with_custom_response(mut self, generator: fn(&CompletionRequest) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of requests received so far
    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Copy of every request received so far
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().clone()
    }

    /// Content of the last user message of a request
    pub fn last_user_content(request: &CompletionRequest) -> &str {
        request
            .messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
            .unwrap_or("")
    }

    fn translated(&self, request: &CompletionRequest) -> String {
        match self.custom_response {
            Some(generator) => generator(request),
            None => format!("[TRANSLATED] {}", Self::last_user_content(request)),
        }
    }
}

#[async_trait]
impl ChatProvider for MockProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        let count = {
            let mut requests = self.requests.lock();
            requests.push(request.clone());
            requests.len()
        };

        match self.behavior {
            MockBehavior::Echo => Ok(Self::last_user_content(&request).to_string()),

            MockBehavior::Working => Ok(self.translated(&request)),

            MockBehavior::Scripted => self.script.lock().pop_front().ok_or_else(|| {
                ProviderError::RequestFailed(format!("mock script exhausted at request {}", count))
            }),

            MockBehavior::FailAfter { successes } => {
                if count <= successes {
                    Ok(self.translated(&request))
                } else {
                    Err(ProviderError::ApiError {
                        status_code: 500,
                        message: format!("Simulated failure on request {}", count),
                    })
                }
            }

            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "Simulated connection failure".to_string(),
            )),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
