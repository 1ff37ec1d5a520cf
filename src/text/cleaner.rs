/*!
 * Post-processing of model replies.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Leading section marker such as `[6]`
static SECTION_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[\d+\]").expect("section marker pattern is valid")
});

/// Remove one layer of wrapping quotes from `text`, if present.
fn strip_wrapping_quotes(text: &str) -> &str {
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return text[1..text.len() - 1].trim();
        }
    }
    text
}

/// The `[n]` marker at the start of `sentence`, if any.
pub fn section_marker(sentence: &str) -> Option<&str> {
    SECTION_MARKER.find(sentence).map(|m| m.as_str())
}

/// Clean a model reply.
///
/// Strips exactly one layer of wrapping `"` or `'` quotes the model may have
/// added, then re-attaches the `[n]` section marker that `original_sentence`
/// starts with when the reply lost it. Never fails; anything that does not
/// match is returned as-is.
pub fn clean_translation(text: &str, original_sentence: &str) -> String {
    let cleaned = strip_wrapping_quotes(text);

    match section_marker(original_sentence) {
        Some(marker) if !cleaned.starts_with(marker) => format!("{} {}", marker, cleaned),
        _ => cleaned.to_string(),
    }
}
