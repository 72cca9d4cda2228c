//! Secret-vault CLI credential store
//!
//! Shells out to the 1Password CLI: `op read op://private/<NAME>_API_KEY`.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;

use super::env_key_name;
use super::traits::SecretStore;

/// How long a single vault invocation may take before it counts as absent.
const VAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Vault item prefix; credentials live under the private vault.
const VAULT_PATH: &str = "op://private";

/// Credential store backed by an external secret-vault CLI
///
/// The last-resort source in the cascade, never a hard dependency: a
/// missing binary, non-zero exit, or timeout all collapse to "absent".
/// Exit code 0 signals success, with the secret on standard output.
#[derive(Debug, Clone)]
pub struct VaultStore {
    command: String,
}

impl VaultStore {
    /// Store over the `op` CLI found on `PATH`
    pub fn new() -> Self {
        Self::with_command("op")
    }

    /// Use a different CLI binary (tests point this at a stub)
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for VaultStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SecretStore for VaultStore {
    fn name(&self) -> &str {
        "vault"
    }

    async fn is_available(&self) -> bool {
        let probe = Command::new(&self.command)
            .arg("--version")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();
        match timeout(VAULT_TIMEOUT, probe).await {
            Ok(Ok(output)) => output.status.success(),
            _ => false,
        }
    }

    async fn get(&self, key: &str) -> Option<String> {
        let item = format!("{VAULT_PATH}/{}", env_key_name(key));
        let read = Command::new(&self.command)
            .arg("read")
            .arg(&item)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        match timeout(VAULT_TIMEOUT, read).await {
            Ok(Ok(output)) if output.status.success() => {
                let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
                (!value.is_empty()).then_some(value)
            }
            Ok(Ok(output)) => {
                tracing::debug!(item = %item, status = ?output.status.code(), "vault read exited non-zero");
                None
            }
            Ok(Err(err)) => {
                tracing::debug!(item = %item, error = %err, "vault command failed to launch");
                None
            }
            Err(_) => {
                tracing::debug!(item = %item, "vault read timed out");
                None
            }
        }
    }
}
