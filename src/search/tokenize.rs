//! Tokenization of catalog text and queries into significant words.

use super::normalize::normalize;
use ahash::AHashSet;

/// Set of normalized, stop-word-filtered tokens.
pub type TokenSet = AHashSet<String>;

/// Minimum token length kept by the tokenizer. Single characters are noise.
const MIN_TOKEN_LENGTH: usize = 2;

/// Spanish and English articles, conjunctions and prepositions.
/// These appear in almost every description and carry no relevance.
pub const STOP_WORDS: &[&str] = &[
    "de", "la", "el", "en", "y", "los", "las", "del", "un", "una", "con", "para", "por", "es",
    "al", "se", "que", "su", "o", "como", "the", "an", "and", "or", "of", "to", "in", "for", "on",
    "with",
];

/// Returns true if `word` is a built-in stop word. Expects normalized input.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Splits text into the set of significant normalized words.
///
/// Runs [`normalize`], splits on whitespace, then drops single characters and
/// stop words. Duplicates collapse. Blank input yields an empty set.
pub fn tokenize(text: &str) -> TokenSet {
    if text.trim().is_empty() {
        return TokenSet::new();
    }

    normalize(text)
        .split_whitespace()
        .filter(|token| token.len() >= MIN_TOKEN_LENGTH)
        .filter(|token| !is_stop_word(token))
        .map(str::to_owned)
        .collect()
}
