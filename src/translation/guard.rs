/*!
 * Degenerate-input guard.
 *
 * Models asked to translate a bare quotation mark reply with chatter instead
 * of the mark. Chunks consisting only of one or two quotation marks are
 * therefore never sent; the translator echoes them back verbatim.
 */

/// Straight and curly quotation marks recognised by the guard
pub const QUOTATION_MARKS: [char; 6] = ['\'', '"', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}'];

/// Whether `text` is a lone quotation token that must bypass the model.
///
/// True when the trimmed text is one or two characters long and every
/// character is a quotation mark. Anything else, including other short
/// punctuation such as `"."` or `"!?"`, is translated normally.
pub fn is_lone_quote(text: &str) -> bool {
    let trimmed = text.trim();
    let count = trimmed.chars().count();
    (1..=2).contains(&count) && trimmed.chars().all(|c| QUOTATION_MARKS.contains(&c))
}
