//! # URL Resolver
//!
//! The read path of a URL shortener: resolves short codes to stored URL
//! records, applies the expiration policy, and issues HTTP redirects.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities, the store trait, and the
//!   resolution outcome model
//! - **Application Layer** ([`application`]) - Resolution logic and expiration policy
//! - **Infrastructure Layer** ([`infrastructure`]) - Record store implementations
//! - **API Layer** ([`api`]) - HTTP handlers, response mapping, and middleware
//!
//! ## Resolution Flow
//!
//! 1. `GET /{code}` extracts the short code
//! 2. The resolver validates the code before any I/O
//! 3. The record is fetched from the store under `{code}.json`
//! 4. The record is deserialized and checked against its expiry instant
//! 5. The outcome maps to exactly one HTTP status (301/404/410/400/500)
//!
//! ## Quick Start
//!
//! ```bash
//! # Point at a record store (optional; falls back to in-memory)
//! export STORE_URL="redis://localhost:6379/0"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ResolverService;
    pub use crate::domain::entities::UrlRecord;
    pub use crate::domain::resolution::Resolution;
    pub use crate::domain::store::{FetchError, ObjectStore};
    pub use crate::state::AppState;
}
