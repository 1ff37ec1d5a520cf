use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::{ChatMessage, ChatProvider, CompletionRequest};

/// Default public endpoint of the OpenAI API
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// OpenAI client for interacting with the chat completions API
pub struct OpenAI {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API base URL, e.g. `https://api.openai.com/v1`
    endpoint: String,
}

impl std::fmt::Debug for OpenAI {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAI")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

/// Chat completions request body
#[derive(Debug, Serialize)]
pub struct OpenAIRequest<'a> {
    /// The model to use
    model: &'a str,

    /// The messages for the conversation
    messages: &'a [ChatMessage],

    /// Temperature for generation
    temperature: f32,
}

/// Message inside a response choice
#[derive(Debug, Deserialize)]
pub struct OpenAIMessage {
    /// Role of the message sender
    pub role: String,

    /// Content of the message; absent for tool-call replies
    #[serde(default)]
    pub content: Option<String>,
}

/// One completion choice
#[derive(Debug, Deserialize)]
pub struct OpenAIChoice {
    pub message: OpenAIMessage,
}

/// Token usage information
#[derive(Debug, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Chat completions response body
#[derive(Debug, Deserialize)]
pub struct OpenAIResponse {
    pub choices: Vec<OpenAIChoice>,
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

impl OpenAIResponse {
    /// Extract the text of the first choice
    pub fn first_text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

impl OpenAI {
    /// Create a new OpenAI client
    ///
    /// An empty endpoint falls back to the public API. `timeout_secs` bounds
    /// each request; it is the only deadline in the translation path, so a
    /// client that cannot be built with it is an error.
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self, ProviderError> {
        let endpoint = endpoint.into();
        let endpoint = if endpoint.is_empty() {
            DEFAULT_ENDPOINT.to_string()
        } else {
            endpoint.trim_end_matches('/').to_string()
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ProviderError::RequestFailed(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            endpoint,
        })
    }

    /// The chat completions URL for this client
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }

    fn status_error(status: StatusCode, message: String) -> ProviderError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ProviderError::AuthenticationError(message)
            }
            StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimitExceeded(message),
            _ => ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            },
        }
    }
}

#[async_trait]
impl ChatProvider for OpenAI {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        let body = OpenAIRequest {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature,
        };

        debug!("OpenAI request: POST {} ({} messages)", self.completions_url(), request.messages.len());

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ProviderError::ConnectionError(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        debug!("OpenAI response: HTTP {}", status);

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("OpenAI API error ({}): {}", status, error_text);
            return Err(Self::status_error(status, error_text));
        }

        let parsed = response
            .json::<OpenAIResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        parsed
            .first_text()
            .map(str::to_string)
            .ok_or_else(|| ProviderError::ParseError("response contained no message content".to_string()))
    }

    fn name(&self) -> &str {
        "openai"
    }
}
