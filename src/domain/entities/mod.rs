//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without orchestration logic. The only
//! entity on the read path is [`UrlRecord`], the stored association between a
//! short code and its destination URL plus expiry instant.

pub mod url_record;

pub use url_record::UrlRecord;
