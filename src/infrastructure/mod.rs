//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for record storage.
//!
//! # Modules
//!
//! - [`store`] - Object store implementations (Redis and in-memory)

pub mod store;
