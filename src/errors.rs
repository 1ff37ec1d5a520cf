/*!
 * Error types for the epistula library.
 *
 * This module contains custom error types for different parts of the library,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when working with model provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur during translation of a letter
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the model provider, passed through unmodified
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The three stages of a paragraph disagree on sentence count
    #[error(
        "Paragraph {paragraph_index} stages are misaligned: \
         {original} original, {direct} direct, {rhetorical} rhetorical"
    )]
    StageMisalignment {
        paragraph_index: usize,
        original: usize,
        direct: usize,
        rhetorical: usize,
    },
}

/// Errors that can occur while reading letters
#[derive(Error, Debug)]
pub enum LetterError {
    /// The letter text or file had no content at all
    #[error("Empty letter: {0}")]
    Empty(String),

    /// The first line is not `<ROMAN>. <TITLE>`
    #[error("Invalid title line, expected 'ROMAN_NUMERAL. TITLE', got '{0}'")]
    InvalidTitle(String),

    /// The numeral part of the title line is not a Roman numeral
    #[error("Invalid Roman numeral '{numeral}': {reason}")]
    InvalidRoman {
        numeral: String,
        reason: String,
    },

    /// The letter file could not be read
    #[error("Failed to read letter file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors in configuration and prompt loading
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A prompt template file could not be read
    #[error("Failed to read prompt file {path}: {source}")]
    PromptFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No API key in the config file or the environment
    #[error("No API key configured; set model.api_key or the {0} environment variable")]
    MissingApiKey(String),

    /// The model endpoint is not a usable URL
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        endpoint: String,
        reason: String,
    },

    /// Any other invalid setting
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from letter loading
    #[error("Letter error: {0}")]
    Letter(#[from] LetterError),

    /// Error from configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
