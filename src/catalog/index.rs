//! Immutable in-memory catalog with id, category and kind lookups.

use super::entry::{CatalogEntry, EntryKind};
use crate::error::CatalogError;
use ahash::AHashMap;
use rmcp::schemars;
use serde::Deserialize;
use std::collections::BTreeSet;

/// Subset of the catalog a search is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    /// Components and templates
    #[default]
    All,
    /// Components only
    Components,
    /// Page templates only
    Templates,
}

impl SearchScope {
    pub fn includes(self, kind: EntryKind) -> bool {
        match self {
            Self::All => true,
            Self::Components => kind == EntryKind::Component,
            Self::Templates => kind == EntryKind::Template,
        }
    }
}

/// The searchable catalog.
///
/// Entries keep their source order. Built once and never mutated; a refresh
/// builds a new index and swaps it in (see [`crate::state::CatalogState`]).
#[derive(Debug, Default)]
pub struct CatalogIndex {
    entries: Vec<CatalogEntry>,
    /// Map from entry id to position in `entries`
    by_id: AHashMap<String, usize>,
    /// Map from lower-cased category to positions in `entries`, in source order
    by_category: AHashMap<String, Vec<usize>>,
}

impl CatalogIndex {
    /// Validate and index `entries`.
    ///
    /// Fails on a blank or duplicate id; nothing is partially indexed.
    pub fn build(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let start = std::time::Instant::now();
        let mut by_id: AHashMap<String, usize> = AHashMap::with_capacity(entries.len());
        let mut by_category: AHashMap<String, Vec<usize>> = AHashMap::new();

        for (position, entry) in entries.iter().enumerate() {
            if entry.id.trim().is_empty() {
                return Err(CatalogError::EmptyId { position });
            }
            if let Some(&first) = by_id.get(&entry.id) {
                return Err(CatalogError::DuplicateId {
                    id: entry.id.clone(),
                    first,
                    second: position,
                });
            }
            by_id.insert(entry.id.clone(), position);
            by_category
                .entry(entry.category.to_lowercase())
                .or_default()
                .push(position);
        }

        let index = Self {
            entries,
            by_id,
            by_category,
        };

        tracing::info!(
            "Built catalog index: {} components, {} templates, {} categories in {:?}",
            index.count_of_kind(EntryKind::Component),
            index.count_of_kind(EntryKind::Template),
            index.by_category.len(),
            start.elapsed()
        );

        Ok(index)
    }

    /// All entries in source order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn by_id(&self, id: &str) -> Option<&CatalogEntry> {
        self.by_id.get(id).map(|&position| &self.entries[position])
    }

    /// Entries of one category in source order, matched without regard to
    /// case. Unknown categories are empty.
    pub fn by_category(&self, category: &str) -> Vec<&CatalogEntry> {
        self.by_category
            .get(&category.to_lowercase())
            .map(|positions| positions.iter().map(|&p| &self.entries[p]).collect())
            .unwrap_or_default()
    }

    pub fn all_of_kind(&self, kind: EntryKind) -> Vec<&CatalogEntry> {
        self.entries.iter().filter(|e| e.kind == kind).collect()
    }

    pub fn count_of_kind(&self, kind: EntryKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    /// Entries a search over `scope` should score.
    pub fn scope(&self, scope: SearchScope) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|e| scope.includes(e.kind))
            .collect()
    }

    /// All distinct categories, lower-cased and sorted.
    pub fn categories(&self) -> BTreeSet<&str> {
        self.by_category.keys().map(String::as_str).collect()
    }

    /// Categories that contain at least one entry of `kind`, lower-cased and sorted.
    pub fn categories_of_kind(&self, kind: EntryKind) -> BTreeSet<&str> {
        self.by_category
            .iter()
            .filter(|(_, positions)| positions.iter().any(|&p| self.entries[p].kind == kind))
            .map(|(category, _)| category.as_str())
            .collect()
    }
}
