/*!
 * System prompts for the two translation phases.
 *
 * Prompts are plain text with no placeholders. They come either from the
 * built-in defaults or from a directory holding `direct.v1.txt` and
 * `rhetorical.v1.txt`.
 */

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app_config::PromptConfig;
use crate::errors::ConfigError;

/// File name of the direct-phase prompt inside a prompt directory
pub const DIRECT_PROMPT_FILE: &str = "direct.v1.txt";

/// File name of the rhetorical-phase prompt inside a prompt directory
pub const RHETORICAL_PROMPT_FILE: &str = "rhetorical.v1.txt";

/// The pair of system prompts an orchestrator works with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSet {
    /// Latin to literal English
    pub direct: String,
    /// Literal English to idiomatic modern English
    pub rhetorical: String,
}

impl PromptSet {
    /// The default direct-phase prompt.
    pub const DIRECT: &'static str = r#"You are a careful translator of classical Latin prose.

Translate the Latin sentence you are given into English as literally as good English allows.
- Keep the structure and order of the original clauses where possible
- Keep section markers such as [6] exactly where they appear
- Keep quotation marks and other punctuation as in the original
- Do not add explanations, notes or alternatives

Return only the translation."#;

    /// The default rhetorical-phase prompt.
    pub const RHETORICAL: &'static str = r#"You are an editor who turns literal translations into natural modern English.

Rewrite the literal English sentence you are given as idiomatic, readable modern prose.
- Preserve the full meaning; do not summarise or omit anything
- Keep section markers such as [6] at the start of the sentence
- Keep quotation marks that open or close a quotation
- Do not add explanations, notes or alternatives

Return only the rewritten sentence."#;

    /// Create a prompt set from explicit texts
    pub fn new(direct: impl Into<String>, rhetorical: impl Into<String>) -> Self {
        Self {
            direct: direct.into(),
            rhetorical: rhetorical.into(),
        }
    }

    /// Built-in prompts
    pub fn builtin() -> Self {
        Self::new(Self::DIRECT, Self::RHETORICAL)
    }

    /// Load both prompts from `dir`.
    ///
    /// Fails with [`ConfigError::PromptFile`] naming the first file that is
    /// missing or unreadable.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        let direct = read_prompt(dir.join(DIRECT_PROMPT_FILE))?;
        let rhetorical = read_prompt(dir.join(RHETORICAL_PROMPT_FILE))?;
        Ok(Self::new(direct, rhetorical))
    }

    /// Prompts from the configured directory, or the built-in ones.
    pub fn from_config(config: &PromptConfig) -> Result<Self, ConfigError> {
        match &config.directory {
            Some(dir) => Self::load_from_dir(dir),
            None => Ok(Self::builtin()),
        }
    }
}

impl Default for PromptSet {
    fn default() -> Self {
        Self::builtin()
    }
}

fn read_prompt(path: PathBuf) -> Result<String, ConfigError> {
    match fs::read_to_string(&path) {
        Ok(text) => Ok(text),
        Err(source) => Err(ConfigError::PromptFile { path, source }),
    }
}
