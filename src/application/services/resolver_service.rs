//! Short code resolution service.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::entities::UrlRecord;
use crate::domain::resolution::Resolution;
use crate::domain::store::{FetchError, ObjectStore};

/// Suffix appended to the short code to form the store key. Identifies the
/// record serialization format; part of the store/reader contract.
const RECORD_KEY_SUFFIX: &str = ".json";

/// Service resolving short codes to stored URL records.
///
/// The resolver is pure given its inputs: the short code, the injected store
/// handle, and the `now` instant supplied by the caller. Every outcome is a
/// [`Resolution`] variant, so the resolve call itself is infallible.
pub struct ResolverService {
    store: Arc<dyn ObjectStore>,
}

impl ResolverService {
    /// Creates a new resolver service over the given store.
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Resolves a short code at instant `now` (epoch seconds).
    ///
    /// # Flow
    ///
    /// 1. Validate the code before any I/O: empty or whitespace-only codes
    ///    fail fast with [`Resolution::BadRequest`].
    /// 2. Derive the store key (`{code}.json`) and fetch the record bytes.
    /// 3. Deserialize into [`UrlRecord`]; malformed records are classified as
    ///    store errors, never as silent not-founds.
    /// 4. Apply the expiration policy: a record expiring exactly at `now`
    ///    still redirects.
    ///
    /// Store failures are logged here with the lookup key and underlying
    /// cause, and surfaced as [`Resolution::StoreError`] without local retry.
    pub async fn resolve(&self, short_code: &str, now: i64) -> Resolution {
        if short_code.trim().is_empty() {
            return Resolution::bad_request("urlCode is missing or empty");
        }

        let key = record_key(short_code);
        debug!("Fetching record for key {}", key);

        let bytes = match self.store.fetch(&key).await {
            Ok(bytes) => bytes,
            Err(FetchError::NotFound) => {
                debug!("No record found for key {}", key);
                return Resolution::NotFound;
            }
            Err(FetchError::Backend(cause)) => {
                error!("Store fetch failed for key {}: {}", key, cause);
                return Resolution::store_error("Failed to fetch URL record");
            }
        };

        let record: UrlRecord = match serde_json::from_slice(&bytes) {
            Ok(record) => record,
            Err(cause) => {
                error!("Malformed record for key {}: {}", key, cause);
                return Resolution::store_error("Failed to read URL record");
            }
        };

        if !record.is_valid_at(now) {
            debug!("Record for key {} expired at {}", key, record.expiration_time);
            return Resolution::Expired;
        }

        Resolution::Redirect {
            target_url: record.original_url,
        }
    }
}

/// Derives the store key for a short code.
fn record_key(short_code: &str) -> String {
    format!("{}{}", short_code, RECORD_KEY_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::MockObjectStore;

    fn record_bytes(url: &str, expiration_time: i64) -> Vec<u8> {
        format!(
            r#"{{"originalUrl":"{}","expirationTime":{}}}"#,
            url, expiration_time
        )
        .into_bytes()
    }

    #[tokio::test]
    async fn test_resolve_success() {
        let mut mock_store = MockObjectStore::new();
        mock_store
            .expect_fetch()
            .withf(|key| key == "abc123.json")
            .times(1)
            .returning(|_| Ok(record_bytes("https://example.com", 9_999_999_999)));

        let service = ResolverService::new(Arc::new(mock_store));

        let resolution = service.resolve("abc123", 1_700_000_000).await;

        assert_eq!(
            resolution,
            Resolution::Redirect {
                target_url: "https://example.com".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_resolve_empty_code_skips_store() {
        let mut mock_store = MockObjectStore::new();
        mock_store.expect_fetch().times(0);

        let service = ResolverService::new(Arc::new(mock_store));

        let resolution = service.resolve("", 1_700_000_000).await;

        assert_eq!(
            resolution,
            Resolution::BadRequest {
                message: "urlCode is missing or empty".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_resolve_whitespace_code_skips_store() {
        let mut mock_store = MockObjectStore::new();
        mock_store.expect_fetch().times(0);

        let service = ResolverService::new(Arc::new(mock_store));

        let resolution = service.resolve("   ", 1_700_000_000).await;

        assert!(matches!(resolution, Resolution::BadRequest { .. }));
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_store = MockObjectStore::new();
        mock_store
            .expect_fetch()
            .withf(|key| key == "missing1.json")
            .times(1)
            .returning(|_| Err(FetchError::NotFound));

        let service = ResolverService::new(Arc::new(mock_store));

        let resolution = service.resolve("missing1", 1_700_000_000).await;

        assert_eq!(resolution, Resolution::NotFound);
    }

    #[tokio::test]
    async fn test_resolve_expired() {
        let mut mock_store = MockObjectStore::new();
        mock_store
            .expect_fetch()
            .times(1)
            .returning(|_| Ok(record_bytes("https://example.com", 1000)));

        let service = ResolverService::new(Arc::new(mock_store));

        let resolution = service.resolve("expired1", 2000).await;

        assert_eq!(resolution, Resolution::Expired);
    }

    #[tokio::test]
    async fn test_resolve_expiry_equality_still_redirects() {
        let mut mock_store = MockObjectStore::new();
        mock_store
            .expect_fetch()
            .times(1)
            .returning(|_| Ok(record_bytes("https://example.com", 2000)));

        let service = ResolverService::new(Arc::new(mock_store));

        let resolution = service.resolve("edge", 2000).await;

        assert_eq!(
            resolution,
            Resolution::Redirect {
                target_url: "https://example.com".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_resolve_backend_error() {
        let mut mock_store = MockObjectStore::new();
        mock_store
            .expect_fetch()
            .times(1)
            .returning(|_| Err(FetchError::Backend("connection refused".to_string())));

        let service = ResolverService::new(Arc::new(mock_store));

        let resolution = service.resolve("abc123", 1_700_000_000).await;

        assert!(matches!(resolution, Resolution::StoreError { .. }));
    }

    #[tokio::test]
    async fn test_resolve_malformed_record_is_store_error() {
        let mut mock_store = MockObjectStore::new();
        mock_store
            .expect_fetch()
            .times(1)
            .returning(|_| Ok(b"{\"originalUrl\":\"https://example.com\"}".to_vec()));

        let service = ResolverService::new(Arc::new(mock_store));

        let resolution = service.resolve("partial", 1_700_000_000).await;

        assert!(matches!(resolution, Resolution::StoreError { .. }));
    }

    #[tokio::test]
    async fn test_resolve_invalid_json_is_store_error() {
        let mut mock_store = MockObjectStore::new();
        mock_store
            .expect_fetch()
            .times(1)
            .returning(|_| Ok(b"not json at all".to_vec()));

        let service = ResolverService::new(Arc::new(mock_store));

        let resolution = service.resolve("garbage", 1_700_000_000).await;

        assert!(matches!(resolution, Resolution::StoreError { .. }));
    }

    #[tokio::test]
    async fn test_redirect_url_is_untransformed() {
        let url = "https://example.com/path?q=a%20b&x=1#frag";
        let url_owned = url.to_string();
        let mut mock_store = MockObjectStore::new();
        mock_store
            .expect_fetch()
            .times(1)
            .returning(move |_| Ok(record_bytes(&url_owned, 9_999_999_999)));

        let service = ResolverService::new(Arc::new(mock_store));

        let resolution = service.resolve("fancy", 1_700_000_000).await;

        assert_eq!(
            resolution,
            Resolution::Redirect {
                target_url: url.to_string()
            }
        );
    }
}
