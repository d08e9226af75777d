//! Re-reading the catalog document at runtime.

use crate::catalog::EntryKind;
use crate::state::CatalogState;

/// Reload the catalog from its source and report what is now indexed.
///
/// On failure the previous catalog stays active and the error is returned.
pub async fn handle_reload_catalog(state: &CatalogState) -> Result<String, String> {
    let index = state
        .reload()
        .await
        .map_err(|e| format!("Failed to reload catalog: {}", e))?;

    let source = state.source().map_or_else(
        || "memory (no source file configured)".to_string(),
        |path| path.display().to_string(),
    );

    Ok(format!(
        "Catalog reloaded from {}: {} components, {} templates, {} categories.",
        source,
        index.count_of_kind(EntryKind::Component),
        index.count_of_kind(EntryKind::Template),
        index.categories().len()
    ))
}
