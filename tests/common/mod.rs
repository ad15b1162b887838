#![allow(dead_code)]

use std::sync::Arc;

use axum::{Router, routing::get};
use axum_test::TestServer;
use url_resolver::api::handlers::{health_handler, resolve_handler};
use url_resolver::infrastructure::store::MemoryStore;
use url_resolver::state::AppState;

/// Builds a test server over the service routes with a fresh in-memory store.
///
/// Returns the store handle so tests can seed records.
pub fn create_test_server() -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone());
    let app = Router::new()
        .route("/api/health", get(health_handler))
        .route("/{code}", get(resolve_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();
    (server, store)
}

/// Seeds a well-formed record under `{code}.json`.
pub fn put_record(store: &MemoryStore, code: &str, original_url: &str, expiration_time: i64) {
    store.put(
        format!("{code}.json"),
        format!(
            r#"{{"originalUrl":"{}","expirationTime":{}}}"#,
            original_url, expiration_time
        )
        .into_bytes(),
    );
}
