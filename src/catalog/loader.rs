//! Loading the catalog from its JSON document.
//!
//! The document is an object with a `components` array; each element is one
//! [`CatalogEntry`]. Components and templates share the array and are told
//! apart by their `type` field.

use super::entry::CatalogEntry;
use super::index::CatalogIndex;
use crate::error::CatalogError;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    components: Option<Vec<CatalogEntry>>,
}

/// Parse the entries of a catalog document.
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    let document: CatalogDocument = serde_json::from_str(json)?;
    document.components.ok_or(CatalogError::MissingComponents)
}

/// Read, parse and index the catalog document at `path`.
pub async fn load_index(path: &Path) -> Result<CatalogIndex, CatalogError> {
    let start = std::time::Instant::now();
    tracing::info!("Loading catalog from {}", path.display());

    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let entries = parse_catalog(&json)?;
    tracing::debug!("Parsed {} catalog entries in {:?}", entries.len(), start.elapsed());

    CatalogIndex::build(entries)
}
