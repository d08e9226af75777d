//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for process setup.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods in `main` and configuration loading.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when a catalog cannot be loaded or indexed.
///
/// Searching never fails; every variant here is a build-time condition that
/// aborts startup or leaves the current index in place during a reload.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog document could not be read.
    #[error("Failed to read catalog at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The catalog document is not valid JSON or an entry is malformed.
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// The document has no top-level `components` array.
    #[error("Catalog document has no `components` array")]
    MissingComponents,
    /// An entry has a blank id.
    #[error("Catalog entry #{position} has an empty id")]
    EmptyId { position: usize },
    /// Two entries share the same id.
    #[error("Duplicate catalog id '{id}' (entries #{first} and #{second})")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },
}
