//! Live credential validation against provider APIs
//!
//! Each supported provider gets exactly one bounded GET probe; every
//! failure mode collapses into an invalid [`ValidationOutcome`]. An
//! unrecognized provider is a normal outcome, not an error.

mod probes;

use std::time::Duration;

/// How long a single validation probe may take.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of a validation probe
///
/// `message` is a short diagnostic: an HTTP status, an identity fragment
/// returned by the provider, or an error description. Never the
/// credential itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Whether the provider accepted the credential
    pub valid: bool,
    /// Short human-readable diagnostic
    pub message: String,
}

impl ValidationOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// The closed set of providers with a known validation endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    OpenAi,
    Anthropic,
    GitHub,
    Stripe,
}

impl Provider {
    /// Match a provider by name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "openai" => Some(Self::OpenAi),
            "anthropic" => Some(Self::Anthropic),
            "github" => Some(Self::GitHub),
            "stripe" => Some(Self::Stripe),
            _ => None,
        }
    }

    /// All supported providers, for diagnostics
    pub fn all() -> [Provider; 4] {
        [Self::OpenAi, Self::Anthropic, Self::GitHub, Self::Stripe]
    }

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::GitHub => "github",
            Self::Stripe => "stripe",
        }
    }

    /// The fixed endpoint probed during validation
    fn endpoint(&self) -> &'static str {
        match self {
            Self::OpenAi => "https://api.openai.com/v1/models",
            Self::Anthropic => "https://api.anthropic.com/v1/models",
            Self::GitHub => "https://api.github.com/user",
            Self::Stripe => "https://api.stripe.com/v1/customers?limit=1",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Validate a credential against its provider's API
///
/// Issues at most one GET with a 5 second bound and no retries; a failed
/// probe is a final answer for this call.
pub async fn validate_key(provider_name: &str, credential: &str) -> ValidationOutcome {
    let Some(provider) = Provider::from_name(provider_name) else {
        return ValidationOutcome::invalid(format!("No validator for {provider_name}"));
    };

    let client = match reqwest::Client::builder()
        .timeout(PROBE_TIMEOUT)
        .user_agent(concat!("keysource/", env!("CARGO_PKG_VERSION")))
        .build()
    {
        Ok(client) => client,
        Err(err) => return ValidationOutcome::invalid(err.to_string()),
    };

    tracing::debug!(provider = %provider, "probing credential");
    probes::probe(provider, &client, provider.endpoint(), credential).await
}
