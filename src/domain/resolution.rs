//! Terminal outcomes of a resolution attempt.

/// The outcome of resolving a short code.
///
/// Every possible result of the read path is an explicit variant: "not found"
/// and "expired" are ordinary data here, not control-flow interruptions. Each
/// variant maps to exactly one HTTP status (see [`crate::api::response`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Record found and still valid; redirect to the stored URL. Status 301.
    Redirect { target_url: String },

    /// No record exists for the code. Status 404.
    NotFound,

    /// A record exists but its expiry instant has passed. Status 410.
    Expired,

    /// The caller supplied a missing or empty code. Status 400.
    BadRequest { message: String },

    /// The store fetch or record deserialization failed. Status 500.
    ///
    /// The message is kept opaque for the caller; the underlying cause is
    /// logged at the point of failure with the lookup key.
    StoreError { message: String },
}

impl Resolution {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn store_error(message: impl Into<String>) -> Self {
        Self::StoreError {
            message: message.into(),
        }
    }
}
