//! Fixed-order credential resolution
//!
//! Sources are tried in priority order:
//! 1. Process environment
//! 2. `.env` file in the working directory
//! 3. Secret-vault CLI
//!
//! The search short-circuits on the first hit. Strict mode rejects a
//! `.env` hit outright; the vault is never consulted past that rejection.

use crate::error::{ResolveError, ResolveResult};
use crate::secrets::{env_key_name, DotenvStore, EnvStore, SecretStore, VaultStore};
use crate::validators::validate_key;

/// Which source produced a resolved credential
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Environment,
    Dotenv,
    Vault,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Source::Environment => "environment",
            Source::Dotenv => "dotenv",
            Source::Vault => "vault",
        };
        f.write_str(name)
    }
}

/// Per-call resolution policy
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
    /// Probe the resolved credential against its provider
    pub validate: bool,
    /// Refuse `.env`-sourced credentials (CI safety)
    pub strict: bool,
}

/// A successfully resolved credential
#[derive(Clone)]
pub struct ResolvedKey {
    /// The credential itself; excluded from `Debug` output
    pub value: String,
    /// Which source answered
    pub source: Source,
    /// Human-readable origin, e.g. `Environment variable $OPENAI_API_KEY`
    pub source_detail: String,
}

impl std::fmt::Debug for ResolvedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedKey")
            .field("value", &"<redacted>")
            .field("source", &self.source)
            .field("source_detail", &self.source_detail)
            .finish()
    }
}

/// Resolver over the fixed source cascade
///
/// # Example
///
/// ```rust,ignore
/// use keysource_core::{KeyResolver, ResolveOptions};
///
/// let resolver = KeyResolver::new();
/// let resolved = resolver.resolve("openai", ResolveOptions::default()).await?;
/// ```
pub struct KeyResolver {
    env: EnvStore,
    dotenv: DotenvStore,
    vault: VaultStore,
}

impl KeyResolver {
    /// Resolver over the default stores: process environment, `./.env`,
    /// and the `op` CLI
    pub fn new() -> Self {
        Self {
            env: EnvStore::new(),
            dotenv: DotenvStore::new(),
            vault: VaultStore::new(),
        }
    }

    /// Resolver over explicit stores (tests inject stubs here)
    pub fn with_stores(env: EnvStore, dotenv: DotenvStore, vault: VaultStore) -> Self {
        Self { env, dotenv, vault }
    }

    /// Resolve a credential by logical key name
    ///
    /// Returns the first value found together with its source, or one of
    /// the three typed failures. All entities are request-scoped; nothing
    /// is cached between calls.
    pub async fn resolve(&self, key: &str, options: ResolveOptions) -> ResolveResult<ResolvedKey> {
        let env_key = env_key_name(key);

        if let Some(value) = self.env.get(key).await {
            tracing::debug!(key, "resolved from environment");
            let detail = format!("Environment variable ${env_key}");
            return self.finish(key, value, Source::Environment, detail, options).await;
        }

        if let Some(value) = self.dotenv.get(key).await {
            if options.strict {
                // The .env value must not be used under strict mode, not
                // even to validate; the vault is not consulted either.
                tracing::debug!(key, "rejected .env value under strict mode");
                return Err(ResolveError::StrictMode { env_key });
            }
            tracing::debug!(key, "resolved from .env");
            let detail = format!(".env file ({env_key})");
            return self.finish(key, value, Source::Dotenv, detail, options).await;
        }

        if let Some(value) = self.vault.get(key).await {
            tracing::debug!(key, "resolved from vault");
            let detail = format!("vault ({env_key})");
            return self.finish(key, value, Source::Vault, detail, options).await;
        }

        tracing::debug!(key, "not found in any source");
        Err(ResolveError::NotFound { env_key })
    }

    /// Attach the source and run the optional validation probe. A failed
    /// probe converts the whole resolution; it never falls back to an
    /// earlier unexercised source.
    async fn finish(
        &self,
        key: &str,
        value: String,
        source: Source,
        source_detail: String,
        options: ResolveOptions,
    ) -> ResolveResult<ResolvedKey> {
        if options.validate {
            let outcome = validate_key(key, &value).await;
            if !outcome.valid {
                return Err(ResolveError::ValidationFailed {
                    message: outcome.message,
                });
            }
        }
        Ok(ResolvedKey {
            value,
            source,
            source_detail,
        })
    }
}

impl Default for KeyResolver {
    fn default() -> Self {
        Self::new()
    }
}
