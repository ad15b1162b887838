//! Object store implementations backing the record read path.
//!
//! Provides concrete [`crate::domain::store::ObjectStore`] implementations:
//! - [`RedisStore`] - Production Redis-backed store
//! - [`MemoryStore`] - In-memory store for tests and store-less development

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
