/*!
 * Two-phase letter translation.
 *
 * This module contains the translation core. It is split into several
 * submodules:
 *
 * - `context`: Conversation history and the bounded window sent per request
 * - `guard`: Lone quotation marks that must bypass the model
 * - `chunk`: Translation of a single sentence unit
 * - `orchestrator`: Direct and rhetorical phases over a letter
 * - `stages`: Stage-aligned results and their rendering
 * - `prompts`: System prompts for both phases
 * - `batch`: Sequential processing of many letters
 */

// Re-export main types for easier usage
pub use self::batch::BatchProcessor;
pub use self::chunk::ChunkTranslator;
pub use self::context::{window, ConversationHistory};
pub use self::guard::is_lone_quote;
pub use self::orchestrator::{HistoryPolicy, TranslationOrchestrator};
pub use self::prompts::PromptSet;
pub use self::stages::{render_stage, LetterTranslation, Stage, TranslationStages};

// Submodules
pub mod batch;
pub mod chunk;
pub mod context;
pub mod guard;
pub mod orchestrator;
pub mod prompts;
pub mod stages;
