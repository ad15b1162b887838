//! Handler for short URL resolution.

use axum::extract::{Path, State};
use chrono::Utc;

use crate::domain::resolution::Resolution;
use crate::state::AppState;

/// Resolves a short code and redirects to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Extract the short code from the path, untransformed
/// 2. Delegate to the resolver with the current instant
/// 3. Map the resolution outcome to an HTTP response
///
/// # Responses
///
/// - **301 Moved Permanently** with `Location` when the record is valid
/// - **404 Not Found** when no record exists for the code
/// - **410 Gone** when the record's expiry instant has passed
/// - **400 Bad Request** when the code is empty
/// - **500 Internal Server Error** on store or deserialization failure
pub async fn resolve_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Resolution {
    let now = Utc::now().timestamp();
    state.resolver.resolve(&code, now).await
}
