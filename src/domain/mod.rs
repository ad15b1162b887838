//! Domain layer containing business entities and logic.
//!
//! This module implements the core resolution logic following Clean
//! Architecture principles. It defines entities, the store interface, and the
//! resolution outcome model independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`store`] - Key-value object store trait definition
//! - [`resolution`] - Terminal outcome model for a resolution attempt
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - The store trait defines a contract implemented by the infrastructure layer
//! - Resolution logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod resolution;
pub mod store;
