//! keysource core
//!
//! Surface-agnostic credential resolution and validation. A logical key
//! name (`openai`, `github`, ...) is resolved against a fixed cascade of
//! sources — process environment, local `.env` file, secret-vault CLI —
//! and can optionally be probed against the provider that issued it.
//!
//! ```rust,ignore
//! use keysource_core::{KeyResolver, ResolveOptions};
//!
//! let resolver = KeyResolver::new();
//! let resolved = resolver
//!     .resolve("openai", ResolveOptions { validate: true, strict: false })
//!     .await?;
//!
//! println!("found via {}", resolved.source);
//! ```

pub mod error;
pub mod resolver;
pub mod secrets;
pub mod validators;

// Re-export commonly used types
pub use error::{ResolveError, ResolveResult};

pub use resolver::{KeyResolver, ResolveOptions, ResolvedKey, Source};

pub use secrets::{
    env_key_name, DotenvStore, EnvStore, SecretInfo, SecretStore, VaultStore,
};

pub use validators::{validate_key, Provider, ValidationOutcome};
