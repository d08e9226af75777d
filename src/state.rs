//! Process-wide catalog state shared by the tool handlers.
//!
//! The current [`CatalogIndex`] lives behind an `Arc` that readers clone and
//! then search without holding any lock. Refreshing builds a complete new
//! index first and only then swaps the pointer, so a search never sees a
//! partially built catalog and a failed reload leaves the old one in place.

use crate::catalog::{CatalogIndex, load_index};
use crate::error::CatalogError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

pub struct CatalogState {
    /// The index searches currently run against
    index: RwLock<Arc<CatalogIndex>>,

    /// Held across load and swap so overlapping reloads install in order
    reload_lock: Mutex<()>,

    /// Catalog document the index was loaded from, if any
    source: Option<PathBuf>,

    /// Result limit used when a request does not give one
    default_limit: usize,
}

impl std::fmt::Debug for CatalogState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogState")
            .field("source", &self.source)
            .field("default_limit", &self.default_limit)
            .finish_non_exhaustive()
    }
}

impl CatalogState {
    /// Wrap an already built index.
    pub fn new(index: CatalogIndex, source: Option<PathBuf>, default_limit: usize) -> Self {
        Self {
            index: RwLock::new(Arc::new(index)),
            reload_lock: Mutex::new(()),
            source,
            default_limit,
        }
    }

    /// Load the catalog at `path` and wrap it.
    pub async fn load(path: &Path, default_limit: usize) -> Result<Self, CatalogError> {
        let index = load_index(path).await?;
        Ok(Self::new(index, Some(path.to_path_buf()), default_limit))
    }

    /// The index as of now. Later swaps do not affect the returned snapshot.
    pub async fn snapshot(&self) -> Arc<CatalogIndex> {
        self.index.read().await.clone()
    }

    /// Install `index` and return the one it replaced.
    pub async fn replace(&self, index: CatalogIndex) -> Arc<CatalogIndex> {
        self.install(Arc::new(index)).await
    }

    async fn install(&self, next: Arc<CatalogIndex>) -> Arc<CatalogIndex> {
        let mut guard = self.index.write().await;
        std::mem::replace(&mut *guard, next)
    }

    /// Re-read the catalog source and swap in the new index.
    ///
    /// Returns the index this call installed. Reloads run one at a time.
    /// Without a source the current index is kept and returned unchanged.
    pub async fn reload(&self) -> Result<Arc<CatalogIndex>, CatalogError> {
        let Some(source) = &self.source else {
            tracing::debug!("No catalog source configured, keeping current index");
            return Ok(self.snapshot().await);
        };

        let _reloading = self.reload_lock.lock().await;

        let index = match load_index(source).await {
            Ok(index) => index,
            Err(e) => {
                tracing::warn!("Catalog reload failed, keeping current index: {}", e);
                return Err(e);
            }
        };

        let installed = Arc::new(index);
        self.install(Arc::clone(&installed)).await;
        tracing::info!("Reloaded catalog: {} entries", installed.len());
        Ok(installed)
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub const fn default_limit(&self) -> usize {
        self.default_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogEntry, EntryKind};
    use assert2::{check, let_assert};

    fn index_of(ids: &[&str]) -> CatalogIndex {
        CatalogIndex::build(
            ids.iter()
                .map(|id| CatalogEntry::new(*id, *id, "misc", EntryKind::Component))
                .collect(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_replace_swaps_and_keeps_old_snapshots() {
        let state = CatalogState::new(index_of(&["one"]), None, 5);
        let before = state.snapshot().await;

        let previous = state.replace(index_of(&["one", "two"])).await;

        check!(Arc::ptr_eq(&before, &previous));
        check!(before.len() == 1);
        check!(state.snapshot().await.len() == 2);
    }

    #[tokio::test]
    async fn test_reload_without_source_keeps_index() {
        let state = CatalogState::new(index_of(&["one"]), None, 5);
        let before = state.snapshot().await;
        let after = state.reload().await.unwrap();
        check!(Arc::ptr_eq(&before, &after));
    }

    #[tokio::test]
    async fn test_reload_returns_installed_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("components.json");
        std::fs::write(&path, r#"{"components": [{"id": "a", "name": "A", "category": "x"}]}"#)
            .unwrap();
        let state = CatalogState::load(&path, 5).await.unwrap();

        let reloaded = state.reload().await.unwrap();

        check!(Arc::ptr_eq(&reloaded, &state.snapshot().await));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_reloads_install_one_of_their_results() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("components.json");
        std::fs::write(&path, r#"{"components": [{"id": "a", "name": "A", "category": "x"}]}"#)
            .unwrap();
        let state = Arc::new(CatalogState::load(&path, 5).await.unwrap());

        let reloads: Vec<_> = (0..8)
            .map(|_| {
                let state = Arc::clone(&state);
                tokio::spawn(async move { state.reload().await.unwrap() })
            })
            .collect();

        let mut installed = Vec::new();
        for reload in reloads {
            installed.push(reload.await.unwrap());
        }

        // Each reload reports the index it built, and the survivor is one of them.
        let current = state.snapshot().await;
        check!(installed.iter().all(|index| index.len() == 1));
        check!(installed.iter().any(|index| Arc::ptr_eq(index, &current)));
        for (i, a) in installed.iter().enumerate() {
            for b in &installed[i + 1..] {
                check!(!Arc::ptr_eq(a, b));
            }
        }
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("components.json");
        std::fs::write(&path, r#"{"components": [{"id": "a", "name": "A", "category": "x"}]}"#)
            .unwrap();

        let state = CatalogState::load(&path, 5).await.unwrap();
        check!(state.snapshot().await.len() == 1);

        std::fs::write(
            &path,
            r#"{"components": [
                {"id": "a", "name": "A", "category": "x"},
                {"id": "a", "name": "A again", "category": "x"}
            ]}"#,
        )
        .unwrap();

        let_assert!(Err(CatalogError::DuplicateId { .. }) = state.reload().await);
        check!(state.snapshot().await.by_id("a").map(|e| e.name.as_str()) == Some("A"));
    }
}
