//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `catalog_state`: State over `tests/fixtures/catalog.json`, read-only use
//! - `isolated_catalog`: Copy of the fixture catalog in a temp directory, for
//!   tests that rewrite the catalog file and reload it

use poncho_mcp::catalog::{CatalogIndex, parse_catalog};
use poncho_mcp::state::CatalogState;
use rstest::fixture;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Default result limit used by the fixtures.
#[allow(dead_code)] // Used across different integration test crates
pub const DEFAULT_LIMIT: usize = 5;

/// Returns the project root directory (where Cargo.toml lives).
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Path of the fixture catalog document.
pub fn fixture_catalog_path() -> PathBuf {
    project_root().join("tests/fixtures/catalog.json")
}

fn state_from(path: &Path) -> CatalogState {
    let json = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read '{}': {}", path.display(), e));
    let entries = parse_catalog(&json).expect("Fixture catalog should parse");
    let index = CatalogIndex::build(entries).expect("Fixture catalog should index");
    CatalogState::new(index, Some(path.to_path_buf()), DEFAULT_LIMIT)
}

/// A catalog document in a temporary directory, cleaned up on drop.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct IsolatedCatalog {
    _temp: TempDir,
    path: PathBuf,
    pub state: Arc<CatalogState>,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl IsolatedCatalog {
    /// Copies the fixture catalog into a fresh temp directory and loads it.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("components.json");
        std::fs::copy(fixture_catalog_path(), &path).expect("Failed to copy fixture catalog");
        let state = Arc::new(state_from(&path));
        Self {
            _temp: temp,
            path,
            state,
        }
    }

    /// Path of the catalog document backing `state`.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the catalog document. The state only sees it after a reload.
    pub fn rewrite(&self, content: &str) {
        std::fs::write(&self.path, content).unwrap_or_else(|e| {
            panic!("Failed to write '{}': {}", self.path.display(), e)
        });
    }
}

impl Default for IsolatedCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Catalog state over the fixture document.
#[fixture]
pub fn catalog_state() -> Arc<CatalogState> {
    Arc::new(state_from(&fixture_catalog_path()))
}

/// Catalog state over a private copy of the fixture document.
///
/// Returns `IsolatedCatalog` rather than the state alone because the temp
/// directory must outlive the test.
#[fixture]
pub fn isolated_catalog() -> IsolatedCatalog {
    IsolatedCatalog::new()
}
