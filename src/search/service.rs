//! Query execution: score a scope of entries, rank and truncate.

use super::scoring::{QueryTerms, score_entry};
use crate::catalog::{CatalogEntry, ScoredEntry};
use std::cmp::Ordering;

/// Searches `scope` for entries relevant to `query`.
///
/// Returns at most `limit` entries with a positive score, sorted by score
/// descending and then by id ascending so equal scores rank reproducibly.
/// A blank query or a zero limit yields an empty list.
///
/// The token set may be empty (e.g. a one-letter query) while the raw query
/// still matches entry names as a substring, so an empty token set does not
/// short-circuit the search.
pub fn search<'a, I>(query: &str, scope: I, limit: usize) -> Vec<ScoredEntry<'a>>
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    if query.trim().is_empty() || limit == 0 {
        return vec![];
    }

    let terms = QueryTerms::new(query);

    let mut results: Vec<ScoredEntry<'a>> = scope
        .into_iter()
        .filter_map(|entry| {
            let score = score_entry(&terms, entry);
            (score > 0.0).then_some(ScoredEntry { entry, score })
        })
        .collect();

    results.sort_by(rank_order);
    results.truncate(limit);

    tracing::debug!(
        "Search for '{}' ({} tokens) returned {} results",
        query,
        terms.tokens().len(),
        results.len()
    );

    results
}

/// Score descending, then id ascending.
fn rank_order(a: &ScoredEntry<'_>, b: &ScoredEntry<'_>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.entry.id.cmp(&b.entry.id))
}
