//! In-memory object store for tests and store-less development.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::store::{FetchError, FetchResult, ObjectStore};

/// A store holding records in process memory.
///
/// Used when no `STORE_URL` is configured (development without Redis) and as
/// the backing store for integration tests. Fetches never touch I/O, so the
/// RwLock is only ever held for map access.
#[derive(Default)]
pub struct MemoryStore {
    objects: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        debug!("Using MemoryStore (no external record store configured)");
        Self::default()
    }

    /// Inserts raw bytes under a key, replacing any existing value.
    pub fn put(&self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        // A poisoned lock still holds a usable map; recover the guard.
        self.objects
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), bytes.into());
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn fetch(&self, key: &str) -> FetchResult<Vec<u8>> {
        self.objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
            .ok_or(FetchError::NotFound)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
