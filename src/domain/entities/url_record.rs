//! Stored URL record read from the object store.

use serde::{Deserialize, Serialize};

/// A stored short-URL record.
///
/// Represents the association between a short code and its original URL,
/// together with an absolute expiry instant in epoch seconds. Records are
/// written by the shortening service and are read-only here; their lifecycle
/// is owned entirely by the external store.
///
/// # Wire Format
///
/// Field names are fixed camelCase JSON for store compatibility:
///
/// ```json
/// { "originalUrl": "https://example.com", "expirationTime": 9999999999 }
/// ```
///
/// Missing or ill-typed fields fail deserialization rather than defaulting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRecord {
    /// The destination to redirect to. Non-empty whenever a record exists.
    pub original_url: String,

    /// Absolute expiry instant, epoch seconds.
    pub expiration_time: i64,
}

impl UrlRecord {
    /// Returns true if the record is still valid at instant `now`.
    ///
    /// Equality counts as not-yet-expired: a record expiring exactly at `now`
    /// still redirects.
    pub fn is_valid_at(&self, now: i64) -> bool {
        self.expiration_time >= now
    }
}
