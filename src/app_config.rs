/*!
 * Application configuration.
 *
 * This module handles the application configuration including loading,
 * validating and creating the default `conf.json`.
 */

use anyhow::{Context, Result};
use log::{warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use url::Url;

use crate::errors::ConfigError;
use crate::providers::openai::DEFAULT_ENDPOINT;
use crate::translation::chunk::{DEFAULT_MAX_CONTEXT, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::translation::HistoryPolicy;

/// Environment variable consulted when `model.api_key` is empty
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable that overrides `model.endpoint` when set
pub const ENDPOINT_ENV: &str = "OPENAI_API_BASE_URL";

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Model and client settings
    #[serde(default)]
    pub model: ModelConfig,

    /// Where the phase prompts come from
    #[serde(default)]
    pub prompts: PromptConfig,

    /// Lifetime of each phase's conversation history
    #[serde(default)]
    pub history_policy: HistoryPolicy,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Model configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ModelConfig {
    /// Model name (e.g., "gpt-4o")
    #[serde(default = "default_model")]
    pub name: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Previous exchanges sent with each request
    #[serde(default = "default_max_context")]
    pub max_context: usize,

    /// Service endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key; empty means read it from the environment
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_model(),
            temperature: default_temperature(),
            max_context: default_max_context(),
            endpoint: default_endpoint(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Prompt configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct PromptConfig {
    /// Directory holding `direct.v1.txt` and `rhetorical.v1.txt`;
    /// built-in prompts are used when unset
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_max_context() -> usize {
    DEFAULT_MAX_CONTEXT
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

impl Config {
    /// Load the configuration from `path`, writing a default file first when
    /// none exists.
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {}", path.display()))?;
            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            return Ok(config);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write default config to file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.name.trim().is_empty() {
            return Err(ConfigError::Invalid("model name must not be empty".to_string()));
        }

        if !(0.0..=2.0).contains(&self.model.temperature) {
            return Err(ConfigError::Invalid(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.model.temperature
            )));
        }

        if self.model.max_context < 1 {
            return Err(ConfigError::Invalid("max_context must be at least 1".to_string()));
        }

        validate_endpoint(&self.model.endpoint)
    }

    /// API key from the config file, falling back to the environment
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Like [`Config::resolve_api_key`], reading variables through `lookup`
    pub fn resolve_api_key_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<String, ConfigError> {
        if !self.model.api_key.trim().is_empty() {
            return Ok(self.model.api_key.clone());
        }

        lookup(API_KEY_ENV)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey(API_KEY_ENV.to_string()))
    }

    /// Endpoint, overridden by the environment when set
    pub fn resolve_endpoint(&self) -> Result<String, ConfigError> {
        self.resolve_endpoint_with(|name| std::env::var(name).ok())
    }

    /// Like [`Config::resolve_endpoint`], reading variables through `lookup`
    pub fn resolve_endpoint_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<String, ConfigError> {
        match lookup(ENDPOINT_ENV).filter(|url| !url.trim().is_empty()) {
            Some(endpoint) => {
                validate_endpoint(&endpoint)?;
                Ok(endpoint)
            }
            None => Ok(self.model.endpoint.clone()),
        }
    }
}

fn validate_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };

    let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}
