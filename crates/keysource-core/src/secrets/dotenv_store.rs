//! `.env` file credential store

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::candidate_names;
use super::traits::SecretStore;

/// Credential store backed by a local `.env` file
///
/// Scans `NAME=value` lines; surrounding whitespace is trimmed and a
/// matching pair of single or double quotes around the value is stripped.
/// Comments and lines without `=` are ignored. The first matching line
/// wins; later duplicates are never consulted. An unreadable or malformed
/// file is treated as having no entries.
///
/// # Example
///
/// ```
/// use keysource_core::secrets::DotenvStore;
///
/// // Reads ./.env in the current working directory
/// let store = DotenvStore::new();
/// ```
#[derive(Debug, Clone)]
pub struct DotenvStore {
    path: PathBuf,
}

impl DotenvStore {
    /// Store over `./.env` in the current working directory
    pub fn new() -> Self {
        Self::with_path(".env")
    }

    /// Store over an explicit file path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Scan the file for `name=...`; first match wins. An empty value on
    /// the first match counts as absent and ends the scan.
    fn lookup(&self, name: &str) -> Option<String> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((lhs, rhs)) = line.split_once('=') else {
                continue;
            };
            if lhs.trim() != name {
                continue;
            }
            let value = strip_quotes(rhs.trim());
            if value.is_empty() {
                return None;
            }
            return Some(value.to_string());
        }
        None
    }
}

impl Default for DotenvStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SecretStore for DotenvStore {
    fn name(&self) -> &str {
        "dotenv"
    }

    async fn is_available(&self) -> bool {
        self.path.exists()
    }

    async fn get(&self, key: &str) -> Option<String> {
        candidate_names(key)
            .iter()
            .find_map(|name| self.lookup(name))
    }
}

/// Strip one matching pair of single or double quotes
fn strip_quotes(raw: &str) -> &str {
    for quote in ['"', '\''] {
        if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
            return &raw[1..raw.len() - 1];
        }
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env_file(content: &str) -> (tempfile::TempDir, DotenvStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, DotenvStore::with_path(path))
    }

    #[test]
    fn test_dotenv_store_name() {
        assert_eq!(DotenvStore::new().name(), "dotenv");
    }

    #[tokio::test]
    async fn test_dotenv_plain_value() {
        let (_dir, store) = env_file("OPENAI_API_KEY=sk-plain\n");
        assert_eq!(store.get("openai").await, Some("sk-plain".to_string()));
    }

    #[tokio::test]
    async fn test_dotenv_double_quotes_stripped() {
        let (_dir, store) = env_file("OPENAI_API_KEY=\"secret\"\n");
        assert_eq!(store.get("openai").await, Some("secret".to_string()));
    }

    #[tokio::test]
    async fn test_dotenv_single_quotes_stripped() {
        let (_dir, store) = env_file("OPENAI_API_KEY='secret'\n");
        assert_eq!(store.get("openai").await, Some("secret".to_string()));
    }

    #[tokio::test]
    async fn test_dotenv_first_duplicate_wins() {
        let (_dir, store) = env_file("STRIPE_API_KEY=first\nSTRIPE_API_KEY=second\n");
        assert_eq!(store.get("stripe").await, Some("first".to_string()));
    }

    #[tokio::test]
    async fn test_dotenv_comments_and_noise_ignored() {
        let (_dir, store) = env_file(
            "# deployment keys\n\nnot a key line\nGITHUB_API_KEY = ghp_abc \n",
        );
        assert_eq!(store.get("github").await, Some("ghp_abc".to_string()));
    }

    #[tokio::test]
    async fn test_dotenv_verbatim_name() {
        let (_dir, store) = env_file("TEST_KEY=from_file\n");
        assert_eq!(store.get("TEST_KEY").await, Some("from_file".to_string()));
    }

    #[tokio::test]
    async fn test_dotenv_missing_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = DotenvStore::with_path(dir.path().join(".env"));
        assert_eq!(store.get("openai").await, None);
        assert!(!store.is_available().await);
    }

    #[tokio::test]
    async fn test_dotenv_empty_value_is_absent() {
        let (_dir, store) = env_file("OPENAI_API_KEY=\nOPENAI_API_KEY=later\n");
        // First match wins even when empty; the later duplicate stays ignored
        assert_eq!(store.get("openai").await, None);
    }

    #[tokio::test]
    async fn test_dotenv_available_when_present() {
        let (_dir, store) = env_file("");
        assert!(store.is_available().await);
    }
}
