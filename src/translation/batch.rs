/*!
 * Batch translation of letters.
 *
 * Letters are translated one after another through a single orchestrator.
 * Each letter starts with fresh histories; the first failure ends the batch.
 */

use std::time::Instant;

use crate::errors::TranslationError;
use crate::letter::Letter;
use crate::logging::LogContext;

use super::orchestrator::TranslationOrchestrator;
use super::stages::LetterTranslation;

/// Progress callback invoked with `(done, total)` after each letter
pub type ProgressCallback = Box<dyn Fn(usize, usize) + Send + Sync>;

/// Sequential translator for many letters
pub struct BatchProcessor {
    /// The orchestrator every letter goes through
    orchestrator: TranslationOrchestrator,
    /// Optional progress reporting
    progress: Option<ProgressCallback>,
    log: LogContext,
}

impl BatchProcessor {
    pub fn new(orchestrator: TranslationOrchestrator) -> Self {
        Self {
            orchestrator,
            progress: None,
            log: LogContext::default().child("batch"),
        }
    }

    /// Report progress after each translated letter
    pub fn with_progress(mut self, callback: impl Fn(usize, usize) + Send + Sync + 'static) -> Self {
        self.progress = Some(Box::new(callback));
        self
    }

    pub fn with_log_context(mut self, log: LogContext) -> Self {
        self.log = log;
        self
    }

    pub fn orchestrator(&self) -> &TranslationOrchestrator {
        &self.orchestrator
    }

    /// Translate `letters` in order.
    ///
    /// Returns one `LetterTranslation` per letter, or the first error; no
    /// partial results are returned.
    pub async fn process_letters(&self, letters: &[Letter]) -> Result<Vec<LetterTranslation>, TranslationError> {
        let total = letters.len();
        let mut results = Vec::with_capacity(total);
        let start_time = Instant::now();

        self.log.info(format!("Processing batch of {} letters", total));

        for (i, letter) in letters.iter().enumerate() {
            let letter_start = Instant::now();
            let stages = match self.orchestrator.process_letter(letter).await {
                Ok(stages) => stages,
                Err(e) => {
                    self.log.error(format!(
                        "Letter {} ({}) failed after {} of {} letters: {}",
                        letter.roman, letter.title, i, total, e
                    ));
                    return Err(e);
                }
            };

            self.log.info(format!(
                "Letter {} completed in {:?} ({} paragraphs)",
                letter.roman,
                letter_start.elapsed(),
                stages.len()
            ));
            results.push(LetterTranslation::new(letter.clone(), stages));

            if let Some(progress) = &self.progress {
                progress(i + 1, total);
            }
        }

        self.log.info(format!("Batch of {} letters completed in {:?}", total, start_time.elapsed()));
        Ok(results)
    }
}
