//! Text canonicalization shared by indexing and querying.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Canonicalizes text into a comparable form.
///
/// Lower-cases, strips diacritics ("paginación" → "paginacion"), turns `-` and
/// `_` into spaces, drops every other character outside `[a-z0-9]` and
/// ASCII whitespace, then trims. Never fails; empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter_map(|c| match c {
            '-' | '_' => Some(' '),
            c if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_ascii_whitespace() => {
                Some(c)
            }
            _ => None,
        })
        .collect();

    folded.trim().to_string()
}
