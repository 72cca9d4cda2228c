//! Credential source stores
//!
//! One store per origin in the resolution cascade:
//! - `EnvStore` reads the process environment
//! - `DotenvStore` reads a local `.env` file
//! - `VaultStore` shells out to the secret-vault CLI
//!
//! All stores are read-only and implement the `SecretStore` trait.

mod dotenv_store;
mod env_store;
mod traits;
mod vault_store;

pub use dotenv_store::DotenvStore;
pub use env_store::EnvStore;
pub use traits::{SecretInfo, SecretStore};
pub use vault_store::VaultStore;

/// Normalize a logical key name to its environment-variable form
///
/// `openai` becomes `OPENAI_API_KEY`; dashes map to underscores, so
/// `my-service` becomes `MY_SERVICE_API_KEY`.
pub fn env_key_name(key: &str) -> String {
    format!("{}_API_KEY", key.to_uppercase().replace('-', "_"))
}

/// Names a lookup should try, in order: the key verbatim, then its
/// normalized form. `TEST_KEY` set directly in the environment must
/// resolve for key name `TEST_KEY` even though the normalized form is
/// `TEST_KEY_API_KEY`.
pub(crate) fn candidate_names(key: &str) -> [String; 2] {
    [key.to_string(), env_key_name(key)]
}
