//! Shared application state.

use std::sync::Arc;

use crate::application::services::ResolverService;
use crate::domain::store::ObjectStore;

/// State shared across request handlers.
///
/// Holds the resolver service and the store handle it wraps. Both are
/// stateless and safe for concurrent reuse; cloning the state is cheap.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<ResolverService>,
    pub store: Arc<dyn ObjectStore>,
}

impl AppState {
    /// Creates application state over the given store.
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self {
            resolver: Arc::new(ResolverService::new(store.clone())),
            store,
        }
    }
}
