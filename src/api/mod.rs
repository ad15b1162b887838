//! HTTP layer for request/response handling.
//!
//! This layer translates HTTP requests into domain operations and formats
//! responses according to the resolution contract.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing middleware
//! - [`response`] - Mapping from resolution outcomes to HTTP responses
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
