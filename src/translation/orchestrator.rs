/*!
 * Two-phase translation of a letter.
 *
 * Content is split into paragraphs and each paragraph into sentence units.
 * Every unit goes through the direct phase first, then each direct result
 * goes through the rhetorical phase. The two phases keep separate
 * conversation histories, and each paragraph yields one stage-aligned
 * `TranslationStages` record.
 */

use serde::{Deserialize, Serialize};

use crate::errors::{ProviderError, TranslationError};
use crate::letter::Letter;
use crate::logging::LogContext;
use crate::text::{split_paragraphs, split_sentences};

use super::chunk::ChunkTranslator;
use super::context::ConversationHistory;
use super::prompts::PromptSet;
use super::stages::TranslationStages;

/// How long a phase's conversation history lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryPolicy {
    /// Fresh history per phase for every paragraph
    #[default]
    PerParagraph,
    /// Each phase's history runs on across the paragraphs of one letter
    PerLetter,
}

/// Histories of both phases, carried between paragraphs under `PerLetter`
#[derive(Debug, Default)]
struct PhaseHistories {
    direct: Option<ConversationHistory>,
    rhetorical: Option<ConversationHistory>,
}

/// Drives letters through the direct and rhetorical phases.
#[derive(Debug, Clone)]
pub struct TranslationOrchestrator {
    /// Chunk-level translator shared by both phases
    translator: ChunkTranslator,
    /// System prompts, loaded once
    prompts: PromptSet,
    /// History lifetime
    policy: HistoryPolicy,
    /// Where log records go
    log: LogContext,
}

impl TranslationOrchestrator {
    /// Create an orchestrator. The translator logs under a child of `log`.
    pub fn new(translator: ChunkTranslator, prompts: PromptSet, log: LogContext) -> Self {
        let translator = translator.with_log_context(log.child("chunk"));
        Self {
            translator,
            prompts,
            policy: HistoryPolicy::default(),
            log,
        }
    }

    pub fn with_history_policy(mut self, policy: HistoryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn history_policy(&self) -> HistoryPolicy {
        self.policy
    }

    pub fn prompts(&self) -> &PromptSet {
        &self.prompts
    }

    pub fn translator(&self) -> &ChunkTranslator {
        &self.translator
    }

    /// Translate a whole letter, one record per paragraph in order.
    ///
    /// The first model failure aborts the letter and is returned as is.
    pub async fn process_letter(&self, letter: &Letter) -> Result<Vec<TranslationStages>, TranslationError> {
        let log = self.log.scoped(format!("letter {}", letter.roman));
        log.info(format!("Translating '{}'", letter.title));
        self.process(&letter.content, &log).await
    }

    /// Translate raw content that is not wrapped in a `Letter`.
    pub async fn process_content(&self, content: &str) -> Result<Vec<TranslationStages>, TranslationError> {
        self.process(content, &self.log).await
    }

    /// Translate one paragraph with fresh histories for both phases.
    pub async fn translate_paragraph(
        &self,
        paragraph_index: usize,
        paragraph: &str,
    ) -> Result<TranslationStages, TranslationError> {
        let (stages, _) = self
            .translate_paragraph_with(paragraph_index, paragraph, PhaseHistories::default(), &self.log)
            .await?;
        Ok(stages)
    }

    async fn process(&self, content: &str, log: &LogContext) -> Result<Vec<TranslationStages>, TranslationError> {
        let paragraphs = split_paragraphs(content);
        log.info(format!("Processing {} paragraphs", paragraphs.len()));

        let mut results = Vec::with_capacity(paragraphs.len());
        let mut carried = PhaseHistories::default();

        for (i, paragraph) in paragraphs.iter().enumerate() {
            let (stages, histories) = self.translate_paragraph_with(i + 1, paragraph, carried, log).await?;
            carried = match self.policy {
                HistoryPolicy::PerParagraph => PhaseHistories::default(),
                HistoryPolicy::PerLetter => histories,
            };
            results.push(stages);
        }

        log.info(format!("Finished {} paragraphs", results.len()));
        Ok(results)
    }

    async fn translate_paragraph_with(
        &self,
        paragraph_index: usize,
        paragraph: &str,
        histories: PhaseHistories,
        log: &LogContext,
    ) -> Result<(TranslationStages, PhaseHistories), TranslationError> {
        let original = split_sentences(paragraph);
        log.debug(format!("Paragraph {}: {} sentences", paragraph_index, original.len()));

        let (direct, direct_history) = self
            .run_phase(&original, &self.prompts.direct, histories.direct)
            .await?;

        // The rhetorical phase rewrites the direct output, not the source.
        let (rhetorical, rhetorical_history) = self
            .run_phase(&direct, &self.prompts.rhetorical, histories.rhetorical)
            .await?;

        let stages = TranslationStages::new(paragraph_index, original, direct, rhetorical)?;
        let histories = PhaseHistories {
            direct: direct_history,
            rhetorical: rhetorical_history,
        };

        Ok((stages, histories))
    }

    /// Translate `sentences` in order within one phase's history.
    async fn run_phase(
        &self,
        sentences: &[String],
        system_prompt: &str,
        mut history: Option<ConversationHistory>,
    ) -> Result<(Vec<String>, Option<ConversationHistory>), ProviderError> {
        let mut translated = Vec::with_capacity(sentences.len());

        for sentence in sentences {
            let (translation, updated) = self
                .translator
                .translate_chunk(sentence, system_prompt, history.take())
                .await?;
            history = Some(updated);
            translated.push(translation);
        }

        Ok((translated, history))
    }
}
