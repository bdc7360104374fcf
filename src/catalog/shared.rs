//! Process-wide catalog handle
//!
//! Readers (one per client request) hold the shared lock for the whole of a
//! traversal so they observe a single consistent tree. The update side takes
//! the exclusive lock only to swap a freshly built subtree or tree in; it never
//! edits nodes in place while readers may be visiting them.

use super::{Catalog, Directory};
use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::Arc;

/// Cloneable reader-writer handle to the catalog
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl SharedCatalog {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Shared read access; hold the guard for the duration of one traversal
    pub fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.read()
    }

    /// Swap in a whole new tree
    pub fn replace_all(&self, catalog: Catalog) -> Catalog {
        let mut guard = self.inner.write();
        std::mem::replace(&mut *guard, catalog)
    }

    /// Swap in a subtree at its own path, see [`Catalog::replace_subtree`]
    pub fn replace_subtree(&self, subtree: Directory) -> Option<Directory> {
        self.inner.write().replace_subtree(subtree)
    }
}
