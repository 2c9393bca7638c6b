//! Shared request state: the catalog store, profile config, and audit sink.

use std::sync::{Arc, RwLock};

use shoplite_audit::AuditLog;
use shoplite_catalog::{Catalog, ProfileBook};

/// Process-wide holder of the active catalog.
///
/// The catalog itself is an immutable snapshot behind an `Arc`; an upload
/// swaps the pointer in one step, so concurrent readers see either the old
/// or the fully-new catalog, never a mix. Readers that already took a
/// snapshot keep it until they drop it.
#[derive(Debug)]
pub struct CatalogStore {
    active: RwLock<Arc<Catalog>>,
}

impl CatalogStore {
    pub fn new(initial: Catalog) -> Self {
        Self {
            active: RwLock::new(Arc::new(initial)),
        }
    }

    /// Snapshot of the currently active catalog.
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.active
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Atomically replace the active catalog with a fully-ingested one.
    pub fn replace(&self, next: Catalog) {
        let mut guard = self
            .active
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(next);
    }
}

/// Everything the handlers need, layered into the router as an `Extension`.
#[derive(Debug)]
pub struct AppState {
    pub store: CatalogStore,
    pub profiles: ProfileBook,
    pub audit: AuditLog,
}
