//! Redis-backed object store implementation.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info};

use crate::domain::store::{FetchError, FetchResult, ObjectStore};

/// Redis-backed record store.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection
/// reuse; the handle is stateless and safe for concurrent fetches. Keys are
/// namespaced with a configurable prefix, the bucket analogue of the
/// external storage contract.
pub struct RedisStore {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `store_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `namespace` - Key prefix applied to every fetch; controlled via the
    ///   `STORE_NAMESPACE` env var
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Backend`] if the URL is invalid, the connection
    /// cannot be established, or the PING health check fails.
    pub async fn connect(store_url: &str, namespace: &str) -> FetchResult<Self> {
        info!("Connecting to record store at {}", store_url);

        let client = Client::open(store_url).map_err(|e| {
            FetchError::Backend(format!("Failed to create store client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            FetchError::Backend(format!("Failed to connect to store: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| FetchError::Backend(format!("Store PING failed: {}", e)))?;

        info!("✓ Connected to record store");

        Ok(Self {
            client: manager,
            key_prefix: namespace.to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl ObjectStore for RedisStore {
    async fn fetch(&self, key: &str) -> FetchResult<Vec<u8>> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<Vec<u8>>>(&full_key).await {
            Ok(Some(bytes)) => {
                debug!("Store HIT: {} ({} bytes)", full_key, bytes.len());
                Ok(bytes)
            }
            Ok(None) => {
                debug!("Store absent key: {}", full_key);
                Err(FetchError::NotFound)
            }
            Err(e) => {
                error!("Store GET error for {}: {}", full_key, e);
                Err(FetchError::Backend(e.to_string()))
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
