//! Mapping from resolution outcomes to HTTP responses.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::domain::resolution::Resolution;

/// Converts a [`Resolution`] into the wire-level response.
///
/// The mapping is deterministic and total: every variant has exactly one
/// status. Redirects carry a `Location` header and an empty body; every
/// other variant carries a plain-text body. Headers and body are never
/// overloaded into a single slot.
///
/// | Variant      | Status | Payload                      |
/// |--------------|--------|------------------------------|
/// | `Redirect`   | 301    | `Location` header            |
/// | `NotFound`   | 404    | human-readable message       |
/// | `Expired`    | 410    | human-readable message       |
/// | `BadRequest` | 400    | validation message           |
/// | `StoreError` | 500    | opaque message, no internals |
impl IntoResponse for Resolution {
    fn into_response(self) -> Response {
        match self {
            Resolution::Redirect { target_url } => (
                StatusCode::MOVED_PERMANENTLY,
                [(header::LOCATION, target_url)],
            )
                .into_response(),
            Resolution::NotFound => (
                StatusCode::NOT_FOUND,
                "The specified URL code does not exist.",
            )
                .into_response(),
            Resolution::Expired => (StatusCode::GONE, "This URL has expired.").into_response(),
            Resolution::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            Resolution::StoreError { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}
