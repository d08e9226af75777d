//! Keyword search handler for finding catalog entries.

use crate::catalog::{ScoredEntry, SearchScope};
use crate::search::search;
use crate::state::CatalogState;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Search text: a component name or a description of the functionality
    pub query: Option<String>,
    /// Restrict the search to components or templates (default: all)
    #[serde(default)]
    pub scope: Option<SearchScope>,
    /// Maximum number of results to return (default: 5)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Execute a keyword search over the current catalog.
pub async fn handle_search(state: &CatalogState, request: SearchRequest) -> Result<String, String> {
    let index = state.snapshot().await;
    let query = request.query.as_deref().unwrap_or_default();
    let scope = request.scope.unwrap_or_default();
    let limit = request
        .limit
        .filter(|&limit| limit > 0)
        .unwrap_or_else(|| state.default_limit());

    let results = search(query, index.scope(scope), limit);

    if results.is_empty() {
        let mut msg = format!("No results found for '{}'{}.\n\n", query, scope_label(scope));

        msg.push_str("Search tips:\n");
        msg.push_str("• Try a shorter or more general term\n");
        msg.push_str("• Describe the functionality, e.g. 'tabla con filtros' or 'mapa interactivo'\n");
        msg.push_str("• Use list_entries to browse the catalog by category\n");

        return Ok(msg);
    }

    Ok(format_search_results(&results, query, scope))
}

fn scope_label(scope: SearchScope) -> &'static str {
    match scope {
        SearchScope::All => "",
        SearchScope::Components => " in components",
        SearchScope::Templates => " in templates",
    }
}

/// Format search results into a readable Markdown list.
fn format_search_results(results: &[ScoredEntry<'_>], query: &str, scope: SearchScope) -> String {
    let mut output = format!(
        "## Search results for \"{}\"{}\n\n",
        query,
        scope_label(scope)
    );

    for (idx, result) in results.iter().enumerate() {
        let entry = result.entry;
        let _ = writeln!(output, "{}. **{}** (id: `{}`)", idx + 1, entry.name, entry.id);
        let _ = writeln!(output, "   - Kind: {}", entry.kind);
        let _ = writeln!(output, "   - Category: {}", entry.category);
        if !entry.description.trim().is_empty() {
            let _ = writeln!(output, "   - {}", entry.description.trim());
        }
        let _ = writeln!(output, "   - Relevance: {:.2}", result.score);
        output.push('\n');
    }

    output.push_str("---\n");
    output.push_str("Use `get_documentation` with an entry `id` to see its full documentation.");

    output
}
