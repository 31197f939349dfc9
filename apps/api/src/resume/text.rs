//! Small string helpers shared by the field extractors.

/// Collapses every whitespace run (including newlines) to a single space and trims.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True when the text has no lowercase letters (`"JOHN SMITH"`, `"J. SMITH"`).
pub fn is_all_uppercase(text: &str) -> bool {
    text == text.to_uppercase()
}

/// Lowercases, then capitalizes every letter that starts a word.
///
/// A word starts at the beginning of the string or after any non-word
/// character, so `O'BRIEN` becomes `O'Brien`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start && c.is_alphanumeric() {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }
    out
}

/// Strips a leading bullet marker (`•`, `-`, `*`, `▪`, `◦`) and surrounding whitespace.
pub fn strip_bullet(line: &str) -> &str {
    line.trim()
        .trim_start_matches(['•', '-', '*', '▪', '◦', '●'])
        .trim()
}

pub fn is_bullet(line: &str) -> bool {
    line.trim_start().starts_with(['•', '-', '*', '▪', '◦', '●'])
}

/// Iterates lines together with the byte offset of each line's first character.
pub fn lines_with_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split_inclusive('\n').scan(0usize, |offset, raw| {
        let start = *offset;
        *offset += raw.len();
        Some((start, raw.trim_end_matches(['\n', '\r'])))
    })
}
