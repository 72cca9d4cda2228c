//! Core trait and types for credential sources

use async_trait::async_trait;

/// Information about a credential's presence in a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretInfo {
    /// Whether the credential exists
    pub available: bool,
    /// Which store answered
    pub source: String,
}

impl SecretInfo {
    pub fn new(available: bool, source: impl Into<String>) -> Self {
        Self {
            available,
            source: source.into(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            available: false,
            source: "none".to_string(),
        }
    }
}

/// Trait for credential source implementations
///
/// Sources are read-only: the cascade looks credentials up, it never
/// writes, rotates, or caches them. A store that cannot answer — missing
/// file, missing CLI, dead process — reports "absent" rather than an
/// error; partial configuration is an expected steady state.
///
/// Lookups are async because the vault source awaits a subprocess.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Human-readable name of this store
    fn name(&self) -> &str;

    /// Check if this store can answer lookups at all
    ///
    /// A vault store is unavailable when its CLI is not installed.
    async fn is_available(&self) -> bool {
        true
    }

    /// Retrieve a credential by logical key name
    ///
    /// The key is tried verbatim first (`TEST_KEY`), then in normalized
    /// `<NAME>_API_KEY` form (`openai` looks up `OPENAI_API_KEY`).
    async fn get(&self, key: &str) -> Option<String>;

    /// Check if a credential exists
    async fn has(&self, key: &str) -> bool {
        self.get(key).await.is_some()
    }

    /// Get information about a credential without exposing its value
    async fn get_info(&self, key: &str) -> SecretInfo {
        if self.has(key).await {
            SecretInfo::new(true, self.name())
        } else {
            SecretInfo::not_found()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_info() {
        let info = SecretInfo::new(true, "environment");
        assert!(info.available);
        assert_eq!(info.source, "environment");

        let not_found = SecretInfo::not_found();
        assert!(!not_found.available);
        assert_eq!(not_found.source, "none");
    }
}
