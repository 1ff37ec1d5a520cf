/*!
 * Stage-aligned translation records.
 *
 * A `TranslationStages` value holds one paragraph in three parallel forms.
 * Position `i` of every sequence refers to the same source sentence; the
 * constructor refuses anything else, so a record that exists is aligned.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::TranslationError;
use crate::letter::Letter;

/// One paragraph of a letter: original sentences and both translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedStages")]
pub struct TranslationStages {
    /// 1-based position of the paragraph in the letter
    paragraph_index: usize,
    /// Source sentences as segmented
    original: Vec<String>,
    /// Literal translation, one entry per source sentence
    direct: Vec<String>,
    /// Idiomatic rewrite, one entry per direct sentence
    rhetorical: Vec<String>,
}

/// Wire shape checked on deserialization.
#[derive(Deserialize)]
struct UncheckedStages {
    paragraph_index: usize,
    original: Vec<String>,
    direct: Vec<String>,
    rhetorical: Vec<String>,
}

impl TryFrom<UncheckedStages> for TranslationStages {
    type Error = TranslationError;

    fn try_from(raw: UncheckedStages) -> Result<Self, Self::Error> {
        Self::new(raw.paragraph_index, raw.original, raw.direct, raw.rhetorical)
    }
}

impl TranslationStages {
    /// Build a record, failing when the three sequences differ in length.
    pub fn new(
        paragraph_index: usize,
        original: Vec<String>,
        direct: Vec<String>,
        rhetorical: Vec<String>,
    ) -> Result<Self, TranslationError> {
        if original.len() != direct.len() || direct.len() != rhetorical.len() {
            return Err(TranslationError::StageMisalignment {
                paragraph_index,
                original: original.len(),
                direct: direct.len(),
                rhetorical: rhetorical.len(),
            });
        }

        Ok(Self {
            paragraph_index,
            original,
            direct,
            rhetorical,
        })
    }

    pub fn paragraph_index(&self) -> usize {
        self.paragraph_index
    }

    pub fn original(&self) -> &[String] {
        &self.original
    }

    pub fn direct(&self) -> &[String] {
        &self.direct
    }

    pub fn rhetorical(&self) -> &[String] {
        &self.rhetorical
    }

    /// Number of sentences, identical across all three stages
    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Sentences of one stage
    pub fn stage(&self, stage: Stage) -> &[String] {
        match stage {
            Stage::Original => &self.original,
            Stage::Direct => &self.direct,
            Stage::Rhetorical => &self.rhetorical,
        }
    }

    /// Iterate over `(original, direct, rhetorical)` triples
    pub fn aligned(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.original
            .iter()
            .zip(&self.direct)
            .zip(&self.rhetorical)
            .map(|((o, d), r)| (o.as_str(), d.as_str(), r.as_str()))
    }
}

/// Which of the three forms of a paragraph to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Original,
    Direct,
    Rhetorical,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Original => "original",
            Self::Direct => "direct",
            Self::Rhetorical => "rhetorical",
        };
        write!(f, "{}", name)
    }
}

/// Render one stage of a letter as plain text.
///
/// Sentences of a paragraph are joined with a single space and paragraphs
/// are separated by a blank line.
pub fn render_stage(stages: &[TranslationStages], stage: Stage) -> String {
    stages
        .iter()
        .map(|paragraph| paragraph.stage(stage).join(" "))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// A letter together with its translated paragraphs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterTranslation {
    pub letter: Letter,
    pub stages: Vec<TranslationStages>,
}

impl LetterTranslation {
    pub fn new(letter: Letter, stages: Vec<TranslationStages>) -> Self {
        Self { letter, stages }
    }

    /// Render one stage of the whole letter; see [`render_stage`]
    pub fn render(&self, stage: Stage) -> String {
        render_stage(&self.stages, stage)
    }

    /// Total sentence count over all paragraphs
    pub fn sentence_count(&self) -> usize {
        self.stages.iter().map(TranslationStages::len).sum()
    }
}
