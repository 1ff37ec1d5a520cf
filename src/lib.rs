/*!
 * # epistula
 *
 * A Rust library for two-phase machine translation of historical letters.
 *
 * ## Features
 *
 * - Quote-aware paragraph and sentence segmentation
 * - Direct (literal) translation of every sentence, then a rhetorical
 *   rewrite of every direct sentence into idiomatic modern English
 * - Per-phase conversation history with a bounded context window
 * - Lone quotation marks passed through without a model call
 * - Stage-aligned output: original, direct and rhetorical sentences per
 *   paragraph
 * - OpenAI-compatible chat completions client
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `letter`: Letters and the fixture letter source
 * - `text`: Segmentation and cleaning of text
 * - `translation`: The translation core:
 *   - `translation::chunk`: Translation of a single sentence unit
 *   - `translation::orchestrator`: Direct and rhetorical phases over a letter
 *   - `translation::batch`: Sequential processing of many letters
 * - `providers`: Chat model clients:
 *   - `providers::openai`: OpenAI API client
 *   - `providers::mock`: Scripted client for tests
 * - `logging`: Logging context injected into the core
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod letter;
pub mod logging;
pub mod providers;
pub mod text;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use letter::{FixtureLetterSource, Letter};
pub use logging::LogContext;
pub use translation::{
    BatchProcessor, ChunkTranslator, HistoryPolicy, LetterTranslation, PromptSet, Stage,
    TranslationOrchestrator, TranslationStages,
};
