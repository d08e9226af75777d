//! Weighted relevance scoring of a query against one catalog entry.
//!
//! The total score is the sum of four independent field matchers:
//! keywords, name, description and category. Each is a pure function of the
//! pre-processed query and one field of the entry, and returns 0.0 when the
//! field is blank or nothing matches.

use super::normalize::normalize;
use super::tokenize::{TokenSet, tokenize};
use crate::catalog::CatalogEntry;
use ahash::AHashSet;

/// Query token equals a normalized keyword.
pub const WEIGHT_EXACT_KEYWORD: f64 = 3.0;
/// Query token and keyword contain one another.
pub const WEIGHT_PARTIAL_KEYWORD: f64 = 2.0;
/// Base weight for name matches, scaled by match quality.
pub const WEIGHT_NAME_MATCH: f64 = 2.5;
/// Base weight for description matches, scaled by token coverage.
pub const WEIGHT_DESCRIPTION_MATCH: f64 = 1.0;
/// Flat weight for a category match.
pub const WEIGHT_CATEGORY_MATCH: f64 = 1.5;

/// A query pre-processed once per search.
#[derive(Debug, Clone)]
pub struct QueryTerms {
    raw: String,
    normalized: String,
    tokens: TokenSet,
}

impl QueryTerms {
    /// Normalize and tokenize `query`.
    pub fn new(query: &str) -> Self {
        Self {
            raw: query.to_string(),
            normalized: normalize(query),
            tokens: tokenize(query),
        }
    }

    /// Build from tokens that were already computed by the caller.
    pub fn with_tokens(tokens: TokenSet, raw_query: &str) -> Self {
        Self {
            raw: raw_query.to_string(),
            normalized: normalize(raw_query),
            tokens,
        }
    }

    /// The query exactly as submitted.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The whole query after [`normalize`].
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Significant query words.
    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }
}

/// Score an entry for raw tokens and query text.
pub fn score(query_tokens: &TokenSet, raw_query: &str, entry: &CatalogEntry) -> f64 {
    score_entry(&QueryTerms::with_tokens(query_tokens.clone(), raw_query), entry)
}

/// Score an entry against a pre-processed query. Never negative.
pub fn score_entry(query: &QueryTerms, entry: &CatalogEntry) -> f64 {
    keyword_score(query.tokens(), &entry.keywords)
        + name_score(query, &entry.name)
        + description_score(query.tokens(), &entry.description)
        + category_score(query.tokens(), &entry.category)
}

/// Exact keyword hits weigh 3.0, containment either way 2.0, once per token.
pub fn keyword_score(query_tokens: &TokenSet, keywords: &[String]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }

    // A keyword that normalizes to "" is contained in every token.
    let normalized: AHashSet<String> = keywords.iter().map(|keyword| normalize(keyword)).collect();

    query_tokens
        .iter()
        .map(|token| {
            if normalized.contains(token) {
                WEIGHT_EXACT_KEYWORD
            } else if normalized.iter().any(|keyword| contains_either(keyword, token)) {
                WEIGHT_PARTIAL_KEYWORD
            } else {
                0.0
            }
        })
        .sum()
}

/// Whole-name equality scores 2x, whole-query containment 1.5x, otherwise
/// the share of query tokens found in the name.
pub fn name_score(query: &QueryTerms, name: &str) -> f64 {
    if name.trim().is_empty() {
        return 0.0;
    }

    let normalized_name = normalize(name);
    let normalized_query = query.normalized();

    // A query that normalizes to "" (e.g. "!!!") is contained in every name.
    if normalized_name == normalized_query {
        return WEIGHT_NAME_MATCH * 2.0;
    }
    if normalized_name.contains(normalized_query) {
        return WEIGHT_NAME_MATCH * 1.5;
    }

    WEIGHT_NAME_MATCH * coverage(query.tokens(), &tokenize(name))
}

/// Share of query tokens found in the description.
pub fn description_score(query_tokens: &TokenSet, description: &str) -> f64 {
    if description.trim().is_empty() {
        return 0.0;
    }

    WEIGHT_DESCRIPTION_MATCH * coverage(query_tokens, &tokenize(description))
}

/// Flat weight when any query token appears in the category.
pub fn category_score(query_tokens: &TokenSet, category: &str) -> f64 {
    if category.trim().is_empty() {
        return 0.0;
    }

    let normalized_category = normalize(category);
    let category_tokens = tokenize(category);

    let matched = query_tokens.iter().any(|token| {
        normalized_category.contains(token.as_str())
            || category_tokens.iter().any(|ct| ct.contains(token.as_str()))
    });

    if matched { WEIGHT_CATEGORY_MATCH } else { 0.0 }
}

/// Fraction of query tokens that have a containment match in `field_tokens`.
#[allow(clippy::cast_precision_loss)]
fn coverage(query_tokens: &TokenSet, field_tokens: &TokenSet) -> f64 {
    if query_tokens.is_empty() || field_tokens.is_empty() {
        return 0.0;
    }

    let matches = query_tokens
        .iter()
        .filter(|token| field_tokens.iter().any(|ft| contains_either(ft, token)))
        .count();

    matches as f64 / query_tokens.len() as f64
}

fn contains_either(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EntryKind;
    use assert2::check;
    use rstest::rstest;

    fn table_entry() -> CatalogEntry {
        CatalogEntry::new("poncho-table", "PonchoTable", "data", EntryKind::Component)
            .with_description("Tabla interactiva con filtros")
            .with_keywords(["tabla", "filtros", "grilla"])
    }

    fn tokens(query: &str) -> TokenSet {
        tokenize(query)
    }

    #[rstest]
    #[case("tabla", 3.0)]
    #[case("filtro", 2.0)]
    #[case("tabla filtros", 6.0)]
    #[case("tabla filtro", 5.0)]
    #[case("grillas", 2.0)]
    #[case("mapa", 0.0)]
    fn test_keyword_score(#[case] query: &str, #[case] expected: f64) {
        let entry = table_entry();
        check!(keyword_score(&tokens(query), &entry.keywords) == expected);
    }

    #[test]
    fn test_keyword_score_accents_and_blanks() {
        let keywords = vec!["Paginación".to_string()];
        check!(keyword_score(&tokens("paginacion"), &keywords) == WEIGHT_EXACT_KEYWORD);
        check!(keyword_score(&tokens("zzz"), &keywords) == 0.0);
        check!(keyword_score(&tokens("tabla"), &[]) == 0.0);
    }

    #[rstest]
    #[case(&["!!"])]
    #[case(&[""])]
    #[case(&["¿?", "mapa"])]
    fn test_keyword_normalizing_to_empty_is_partial_match(#[case] keywords: &[&str]) {
        let keywords: Vec<String> = keywords.iter().map(|k| (*k).to_string()).collect();
        check!(keyword_score(&tokens("tabla"), &keywords) == WEIGHT_PARTIAL_KEYWORD);
        check!(keyword_score(&tokens("tabla filtros"), &keywords) == 2.0 * WEIGHT_PARTIAL_KEYWORD);
    }

    #[rstest]
    #[case("PonchoTable", 5.0)]
    #[case("poncho-table", 2.5)]
    #[case("Poncho", 3.75)]
    #[case("table", 3.75)]
    #[case("ponchotable mapa", 1.25)]
    #[case("mapa", 0.0)]
    fn test_name_score(#[case] query: &str, #[case] expected: f64) {
        check!(name_score(&QueryTerms::new(query), "PonchoTable") == expected);
    }

    #[test]
    fn test_name_score_uses_raw_query_without_tokens() {
        // "a" is below the token length, but still a substring of the name.
        let query = QueryTerms::new("a");
        check!(query.tokens().is_empty());
        check!(name_score(&query, "PonchoTable") == WEIGHT_NAME_MATCH * 1.5);
    }

    #[test]
    fn test_name_score_punctuation_query_is_contained_in_every_name() {
        let query = QueryTerms::new("!!!");
        check!(query.normalized().is_empty());
        check!(query.tokens().is_empty());
        check!(name_score(&query, "PonchoTable") == WEIGHT_NAME_MATCH * 1.5);
        // Both sides normalize to "".
        check!(name_score(&query, "¿?") == WEIGHT_NAME_MATCH * 2.0);
        check!(name_score(&query, "   ") == 0.0);
        check!(name_score(&QueryTerms::new("tabla"), "   ") == 0.0);
    }

    #[rstest]
    #[case("tabla", 1.0)]
    #[case("tabla mapa", 0.5)]
    #[case("filtro", 1.0)]
    #[case("interactivas", 1.0)]
    #[case("mapa", 0.0)]
    fn test_description_score(#[case] query: &str, #[case] expected: f64) {
        let description = "Tabla interactiva con filtros";
        check!(description_score(&tokens(query), description) == expected);
    }

    #[rstest]
    #[case("maps", "maps", WEIGHT_CATEGORY_MATCH)]
    #[case("map", "maps", WEIGHT_CATEGORY_MATCH)]
    #[case("registro", "login-registro", WEIGHT_CATEGORY_MATCH)]
    #[case("login registro", "login-registro", WEIGHT_CATEGORY_MATCH)]
    #[case("datos", "data", 0.0)]
    #[case("tabla", "", 0.0)]
    fn test_category_score(#[case] query: &str, #[case] category: &str, #[case] expected: f64) {
        check!(category_score(&tokens(query), category) == expected);
    }

    #[test]
    fn test_score_sums_fields() {
        let entry = table_entry();
        // keyword 3.0 + description 1.0
        check!(score(&tokens("tabla"), "tabla", &entry) == 4.0);
        // keyword 2.0 + description 1.0
        check!(score(&tokens("filtro"), "filtro", &entry) == 3.0);
        // category 1.5
        check!(score(&tokens("data"), "data", &entry) == 1.5);
        check!(score(&tokens("xyz-no-match"), "xyz-no-match", &entry) == 0.0);
    }

    #[test]
    fn test_score_entry_matches_score() {
        let entry = table_entry();
        let query = QueryTerms::new("Tabla con filtros");
        check!(score_entry(&query, &entry) == score(query.tokens(), query.raw(), &entry));
    }
}
