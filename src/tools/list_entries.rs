//! Browsing the catalog by category and kind.

use crate::catalog::{CatalogEntry, CatalogIndex, EntryKind};
use crate::state::CatalogState;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

/// Parameters for list_entries tool
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListEntriesRequest {
    /// Only list entries of this category (e.g. "data", "maps", "formularios")
    #[serde(default)]
    pub category: Option<String>,
    /// Only list components or only templates
    #[serde(default)]
    pub kind: Option<EntryKind>,
}

/// Parameters for list_categories tool
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListCategoriesRequest {
    /// Only count entries of this kind
    #[serde(default)]
    pub kind: Option<EntryKind>,
}

/// List catalog entries, grouped by category in catalog order.
pub async fn handle_list_entries(
    state: &CatalogState,
    request: ListEntriesRequest,
) -> Result<String, String> {
    let index = state.snapshot().await;
    let matches_kind =
        |entry: &&CatalogEntry| request.kind.is_none_or(|kind| entry.kind == kind);

    let category = request
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_lowercase);

    let mut output = String::from("# Catalog\n\n");

    if let Some(category) = category {
        let entries: Vec<&CatalogEntry> = index
            .by_category(&category)
            .into_iter()
            .filter(matches_kind)
            .collect();

        if entries.is_empty() {
            return Err(format!(
                "Category '{}' not found. Available categories: {}",
                category,
                available_categories(&index, request.kind)
            ));
        }

        let _ = writeln!(output, "**Category:** {}\n", category);
        format_entry_list(&mut output, &entries);
    } else {
        let groups = group_by_category(index.entries().iter().filter(matches_kind));
        if groups.is_empty() {
            output.push_str("No entries found.\n\n");
        }
        for (category, entries) in &groups {
            let _ = writeln!(output, "## {}\n", category);
            format_entry_list(&mut output, entries);
        }
    }

    output.push_str("---\n");
    output.push_str("Use `get_documentation` for the details of one entry.\n");
    output.push_str("Use `search_catalog` to search by functionality.");

    Ok(output)
}

/// List categories with their entry counts.
pub async fn handle_list_categories(
    state: &CatalogState,
    request: ListCategoriesRequest,
) -> Result<String, String> {
    let index = state.snapshot().await;

    let categories = match request.kind {
        Some(kind) => index.categories_of_kind(kind),
        None => index.categories(),
    };

    if categories.is_empty() {
        return Ok("No categories found.".to_string());
    }

    let mut output = format!("Categories ({}):\n", categories.len());
    for category in categories {
        let count = index
            .by_category(category)
            .into_iter()
            .filter(|e| request.kind.is_none_or(|kind| e.kind == kind))
            .count();
        let _ = writeln!(output, "  • {} ({} entries)", category, count);
    }

    Ok(output)
}

fn available_categories(index: &CatalogIndex, kind: Option<EntryKind>) -> String {
    let categories = match kind {
        Some(kind) => index.categories_of_kind(kind),
        None => index.categories(),
    };
    categories.into_iter().collect::<Vec<_>>().join(", ")
}

/// Group entries by category without regard to case, keeping the order and
/// spelling in which categories first appear.
fn group_by_category<'a>(
    entries: impl Iterator<Item = &'a CatalogEntry>,
) -> Vec<(&'a str, Vec<&'a CatalogEntry>)> {
    let mut groups: Vec<(&str, Vec<&CatalogEntry>)> = Vec::new();
    for entry in entries {
        match groups
            .iter_mut()
            .find(|(c, _)| c.to_lowercase() == entry.category.to_lowercase())
        {
            Some((_, members)) => members.push(entry),
            None => groups.push((entry.category.as_str(), vec![entry])),
        }
    }
    groups
}

fn format_entry_list(output: &mut String, entries: &[&CatalogEntry]) {
    for entry in entries {
        let _ = writeln!(output, "- **{}** (`{}`, {})", entry.name, entry.id, entry.kind);
        if !entry.description.trim().is_empty() {
            let _ = writeln!(output, "  {}", entry.description.trim());
        }
        output.push('\n');
    }
}
