/*!
 * Paragraph and sentence segmentation.
 *
 * All functions here are total: any input, including the empty string,
 * yields a (possibly empty) list of trimmed, non-empty units.
 */

/// Characters that end a sentence when they appear outside a quotation
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Double-quote glyphs tracked by the quote-aware scanner.
///
/// Single quotes are deliberately absent: apostrophes and single-quoted
/// speech are too ambiguous to pair reliably in source prose.
const DOUBLE_QUOTES: [char; 4] = ['"', '\u{201C}', '\u{201D}', '\u{201E}'];

fn is_terminator(ch: char) -> bool {
    TERMINATORS.contains(&ch)
}

fn is_double_quote(ch: char) -> bool {
    DOUBLE_QUOTES.contains(&ch)
}

/// Whether `ch` closes a quotation opened with `open`.
///
/// A straight quote is only closed by a straight quote. `“` (and a stray `”`
/// acting as opener) is closed by `”`; the low opener `„` is closed by `“` or
/// `”`. A second `“` inside a `“` quotation does not close it.
fn closes(open: char, ch: char) -> bool {
    match open {
        '"' => ch == '"',
        '\u{201E}' => ch == '\u{201C}' || ch == '\u{201D}',
        _ => ch == '\u{201D}',
    }
}

fn push_unit(units: &mut Vec<String>, buffer: &str) {
    let trimmed = buffer.trim();
    if !trimmed.is_empty() {
        units.push(trimmed.to_string());
    }
}

/// Split text into paragraphs on blank-line boundaries.
///
/// Each paragraph is trimmed and empty candidates are dropped.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n");
    normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

/// Split a paragraph into sentence units without breaking double-quoted spans.
///
/// A `.`, `!` or `?` ends the current unit only while no double quotation is
/// open. Text left over when the input ends (an unterminated fragment, or a
/// quotation that never closes) becomes the final unit.
///
/// A closing glyph seen while no quotation is open opens one, so a stray
/// quote can swallow the rest of the paragraph or end up as a unit of its
/// own. Units made only of quotation marks are never sent to the model; see
/// [`crate::translation::guard`].
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut units = Vec::new();
    let mut buffer = String::new();
    let mut open_quote: Option<char> = None;

    for ch in text.chars() {
        buffer.push(ch);

        if is_double_quote(ch) {
            match open_quote {
                None => open_quote = Some(ch),
                Some(open) if closes(open, ch) => open_quote = None,
                Some(_) => {}
            }
        }

        if open_quote.is_none() && is_terminator(ch) {
            push_unit(&mut units, &buffer);
            buffer.clear();
        }
    }

    push_unit(&mut units, &buffer);
    units
}

/// Split on every terminator, ignoring quotation marks entirely.
pub fn split_naive_sentences(text: &str) -> Vec<String> {
    let mut units = Vec::new();
    let mut buffer = String::new();

    for ch in text.chars() {
        buffer.push(ch);
        if is_terminator(ch) {
            push_unit(&mut units, &buffer);
            buffer.clear();
        }
    }

    push_unit(&mut units, &buffer);
    units
}

/// The parts of a text around its outermost pair of matching ASCII quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotedParts<'a> {
    /// Text before the opening quote
    pub prefix: &'a str,
    /// The quote character, or `None` when no pair was found
    pub quote: Option<char>,
    /// Text between the quotes (the whole input when no pair was found)
    pub inner: &'a str,
    /// Text after the closing quote
    pub suffix: &'a str,
}

/// Locate the first `'` or `"` and the last occurrence of the same character.
///
/// ```
/// use epistula::text::extract_outer_quoted_parts;
///
/// let parts = extract_outer_quoted_parts("Clamo: 'Avoid the crowd. Stay away.' Extra text");
/// assert_eq!(parts.prefix, "Clamo: ");
/// assert_eq!(parts.quote, Some('\''));
/// assert_eq!(parts.inner, "Avoid the crowd. Stay away.");
/// assert_eq!(parts.suffix, " Extra text");
/// ```
pub fn extract_outer_quoted_parts(text: &str) -> QuotedParts<'_> {
    let no_pair = QuotedParts {
        prefix: "",
        quote: None,
        inner: text,
        suffix: "",
    };

    let Some((first, quote)) = text.char_indices().find(|(_, c)| *c == '\'' || *c == '"') else {
        return no_pair;
    };

    match text.rfind(quote) {
        Some(last) if last > first => QuotedParts {
            prefix: &text[..first],
            quote: Some(quote),
            inner: &text[first + 1..last],
            suffix: &text[last + 1..],
        },
        _ => no_pair,
    }
}
