/*!
 * Tests for paragraph and sentence segmentation
 */

use epistula::text::{split_naive_sentences, split_paragraphs, split_sentences};

use crate::common::{LONE_QUOTE_PARAGRAPH, SECTION_SIX};

fn without_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Inputs covering quotes, stray quotes, blank lines and odd whitespace
const SAMPLES: [&str; 8] = [
    "",
    "   \n\n  ",
    "A.\n\nB.\n\nC.",
    "He said, \"Stop. Now.\" and left. Then silence.",
    "Dixit \u{201C}Vale. Iterum vale.\u{201D} Abiit.",
    "An \"unterminated quote. It runs. To the end",
    "Stray\u{201D} quote. Here. \"And another\" one.",
    LONE_QUOTE_PARAGRAPH,
];

#[test]
fn test_splitSentences_anyInput_shouldPreserveNonBlankContent() {
    for sample in SAMPLES {
        for paragraph in split_paragraphs(sample) {
            let units = split_sentences(&paragraph);
            assert_eq!(
                without_whitespace(&units.concat()),
                without_whitespace(&paragraph),
                "paragraph: {:?}",
                paragraph
            );
            assert!(units.iter().all(|u| !u.is_empty() && u.trim() == u));
        }

        let paragraphs = split_paragraphs(sample);
        assert_eq!(without_whitespace(&paragraphs.concat()), without_whitespace(sample));
    }
}

#[test]
fn test_splitSentences_quotedTerminators_shouldKeepQuoteInOneUnit() {
    let units = split_sentences("He said, \"Stop. Now.\" and left. Then silence.");
    assert_eq!(units, vec!["He said, \"Stop. Now.\" and left.", "Then silence."]);

    let holding: Vec<&String> = units.iter().filter(|u| u.contains("\"Stop. Now.\"")).collect();
    assert_eq!(holding.len(), 1);
}

#[test]
fn test_splitSentences_curlyQuotes_shouldPairOpenerAndCloser() {
    let units = split_sentences("Dixit \u{201C}Vale. Iterum vale.\u{201D} Abiit.");
    assert_eq!(units, vec!["Dixit \u{201C}Vale. Iterum vale.\u{201D} Abiit."]);
}

#[test]
fn test_splitSentences_unclosedQuote_shouldRunToEnd() {
    let units = split_sentences("Prius. \"Nunquam clauditur. Et pergit.");
    assert_eq!(units, vec!["Prius.", "\"Nunquam clauditur. Et pergit."]);
}

#[test]
fn test_splitSentences_loneQuoteParagraph_shouldEndWithQuoteUnit() {
    let paragraphs = split_paragraphs(LONE_QUOTE_PARAGRAPH);
    assert_eq!(paragraphs.len(), 1);

    let units = split_sentences(&paragraphs[0]);
    assert_eq!(units.len(), 4);
    assert!(units[0].starts_with("Sic enim coepit"));
    assert_eq!(units[3], "'");
}

#[test]
fn test_splitSentences_sectionSix_shouldYieldFiveUnits() {
    let paragraphs = split_paragraphs(SECTION_SIX);
    let units = split_sentences(&paragraphs[0]);

    assert_eq!(units.len(), 5);
    assert!(units[0].starts_with("[6] Amicus noster Stoicus"));
    assert_eq!(units[4], "'");
}

#[test]
fn test_splitNaiveSentences_shouldIgnoreQuotes() {
    let units = split_naive_sentences("He said, \"Stop. Now.\" and left.");
    assert_eq!(units, vec!["He said, \"Stop.", "Now.", "\" and left."]);
}

#[test]
fn test_splitParagraphs_concreteExample_shouldSplitThree() {
    assert_eq!(split_paragraphs("A.\n\nB.\n\nC."), vec!["A.", "B.", "C."]);
}
