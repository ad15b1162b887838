//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating store access,
//! validation, and the expiration policy. Services consume the store trait
//! and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::resolver_service::ResolverService`] - Short code resolution

pub mod services;
