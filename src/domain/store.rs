//! Object store trait and fetch error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when fetching a record from the store.
///
/// An absent key is a first-class outcome, distinct from every other failure.
/// This mirrors object-store GET semantics: callers must be able to map
/// "no such key" to a 404 and everything else to an infrastructure failure.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The key does not exist in the store.
    #[error("key not found")]
    NotFound,

    /// Any other backend failure (connection, protocol, I/O).
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Result type for store fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Read-only key-value object store holding serialized URL records.
///
/// Implementations must be thread-safe; each fetch is an independent
/// read-only operation, so a single handle is safe for concurrent reuse.
/// No retry policy is applied here or by callers: backend failures surface
/// directly so the HTTP caller can decide whether to retry.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis-backed store
/// - [`crate::infrastructure::store::MemoryStore`] - In-memory store for
///   tests and store-less development
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetches the raw bytes stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NotFound`] if the key is absent and
    /// [`FetchError::Backend`] for every other failure.
    async fn fetch(&self, key: &str) -> FetchResult<Vec<u8>>;

    /// Checks if the store backend is reachable.
    ///
    /// Used by the health check endpoint to report store status.
    async fn health_check(&self) -> bool;
}
