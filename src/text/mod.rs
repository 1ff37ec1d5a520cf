/*!
 * Text handling shared by every translation phase.
 *
 * - `segmenter`: paragraph and quote-aware sentence splitting
 * - `cleaner`: clean-up of model replies
 */

pub mod cleaner;
pub mod segmenter;

pub use cleaner::{clean_translation, section_marker};
pub use segmenter::{
    extract_outer_quoted_parts, split_naive_sentences, split_paragraphs, split_sentences,
    QuotedParts,
};
