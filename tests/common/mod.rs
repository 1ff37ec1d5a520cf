/*!
 * Common test utilities for the epistula test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

use epistula::providers::mock::MockProvider;
use epistula::{ChunkTranslator, LogContext, PromptSet, TranslationOrchestrator};

// Local HTTP server standing in for a chat completions endpoint
pub mod http_stub;

/// Direct-phase prompt used by the test orchestrators
pub const DIRECT_PROMPT: &str = "Translate Latin to English literally";

/// Rhetorical-phase prompt used by the test orchestrators
pub const RHETORICAL_PROMPT: &str = "Rewrite the English translation";

/// Paragraph whose last line is a lone closing quotation mark
pub const LONE_QUOTE_PARAGRAPH: &str = "Sic enim coepit: 'noli, mi Marcelline, torqueri tamquam de re magna deliberes.
Non est res magna vivere: omnes servi tui vivunt, omnia animalia: magnum est honeste mori, prudenter, fortiter.
Cogita quamdiu iam idem facias: cibus, somnus, libido -- per hunc circulum curritur; mori velle non tantum prudens aut fortis aut miser, etiam fastidiosus potest.
'";

/// Section 6 of letter LXXVII, ending in a quote with nothing after it
pub const SECTION_SIX: &str = "[6] Amicus noster Stoicus, homo egregius et, ut verbis illum quibus laudari dignus est laudem, vir fortis ac strenuus, videtur mihi optime illum cohortatus. Sic enim coepit: 'noli, mi Marcelline, torqueri tamquam de re magna deliberes. Non est res magna vivere: omnes servi tui vivunt, omnia animalia: magnum est honeste mori, prudenter, fortiter. Cogita quamdiu iam idem facias: cibus, somnus, libido -- per hunc circulum curritur; mori velle non tantum prudens aut fortis aut miser, etiam fastidiosus potest.'";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Writes a fixture letter file: `<roman>. <title>` followed by the content
pub fn create_letter_file(dir: &Path, filename: &str, roman: &str, title: &str, content: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, &format!("{}. {}\n{}\n", roman, title, content))
}

/// Routes library logs through the test harness; `RUST_LOG=debug` shows them
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds an orchestrator over `provider` with the test prompts
pub fn create_orchestrator(provider: &MockProvider) -> TranslationOrchestrator {
    init_test_logging();
    let translator = ChunkTranslator::new(Arc::new(provider.clone()), "test-model");
    TranslationOrchestrator::new(
        translator,
        PromptSet::new(DIRECT_PROMPT, RHETORICAL_PROMPT),
        LogContext::new("epistula-tests"),
    )
}
