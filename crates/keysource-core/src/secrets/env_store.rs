//! Process environment credential store

use std::env;

use async_trait::async_trait;

use super::candidate_names;
use super::traits::SecretStore;

/// Credential store that reads from environment variables
///
/// Read-only and always available; this is the highest-priority source in
/// the cascade. Empty values count as absent.
///
/// # Example
///
/// ```
/// use keysource_core::secrets::{EnvStore, SecretStore};
///
/// let store = EnvStore::new();
/// // store.get("openai") checks OPENAI_API_KEY
/// ```
#[derive(Debug, Default)]
pub struct EnvStore {
    _private: (), // Prevent direct construction, use new()
}

impl EnvStore {
    /// Create a new environment variable store
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl SecretStore for EnvStore {
    fn name(&self) -> &str {
        "environment"
    }

    async fn get(&self, key: &str) -> Option<String> {
        for name in candidate_names(key) {
            if let Ok(value) = env::var(&name) {
                if !value.is_empty() {
                    return Some(value);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_store_name() {
        let store = EnvStore::new();
        assert_eq!(store.name(), "environment");
    }

    #[tokio::test]
    async fn test_env_store_get_verbatim() {
        temp_env::async_with_vars([("KS_TEST_VERBATIM", Some("direct"))], async {
            let store = EnvStore::new();
            assert_eq!(store.get("KS_TEST_VERBATIM").await, Some("direct".to_string()));
        })
        .await;
    }

    #[tokio::test]
    async fn test_env_store_get_normalized() {
        temp_env::async_with_vars([("KSPROVIDER_API_KEY", Some("sk-test-12345"))], async {
            let store = EnvStore::new();
            // Provider name maps to <UPPER>_API_KEY, case-insensitively
            assert_eq!(store.get("ksprovider").await, Some("sk-test-12345".to_string()));
            assert_eq!(store.get("KsProvider").await, Some("sk-test-12345".to_string()));
        })
        .await;
    }

    #[tokio::test]
    async fn test_env_store_empty_value_is_absent() {
        temp_env::async_with_vars([("KS_TEST_EMPTY", Some(""))], async {
            let store = EnvStore::new();
            assert_eq!(store.get("KS_TEST_EMPTY").await, None);
        })
        .await;
    }

    #[tokio::test]
    async fn test_env_store_not_found() {
        let store = EnvStore::new();
        assert_eq!(store.get("ks_nonexistent_provider_xyz").await, None);
    }

    #[tokio::test]
    async fn test_env_store_always_available() {
        let store = EnvStore::new();
        assert!(store.is_available().await);
    }

    #[tokio::test]
    async fn test_env_store_get_info() {
        temp_env::async_with_vars([("KS_TEST_INFO_API_KEY", Some("value"))], async {
            let store = EnvStore::new();

            let info = store.get_info("ks_test_info").await;
            assert!(info.available);
            assert_eq!(info.source, "environment");

            let not_found = store.get_info("ks_nonexistent_xyz").await;
            assert!(!not_found.available);
        })
        .await;
    }
}
