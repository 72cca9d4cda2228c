//! Resolution error types

use thiserror::Error;

/// Errors that can reach a caller of [`crate::KeyResolver::resolve`]
///
/// Every file, process, and network fault inside the cascade is downgraded
/// to "source absent" at its origin; only these three outcomes (or success)
/// ever surface. Messages carry the normalized variable name, never the
/// credential value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No source had the key
    #[error("{env_key} not found in environment, .env, or vault")]
    NotFound { env_key: String },

    /// The key exists only in `.env` while strict mode forbids it
    #[error("{env_key} found in .env but strict mode requires environment or vault")]
    StrictMode { env_key: String },

    /// A value was found but failed live validation
    #[error("key validation failed: {message}")]
    ValidationFailed { message: String },
}

pub type ResolveResult<T> = Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_all_sources() {
        let err = ResolveError::NotFound {
            env_key: "OPENAI_API_KEY".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "OPENAI_API_KEY not found in environment, .env, or vault"
        );
    }

    #[test]
    fn test_strict_mode_message() {
        let err = ResolveError::StrictMode {
            env_key: "STRIPE_API_KEY".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "STRIPE_API_KEY found in .env but strict mode requires environment or vault"
        );
    }

    #[test]
    fn test_validation_failed_carries_probe_message() {
        let err = ResolveError::ValidationFailed {
            message: "HTTP 401".to_string(),
        };
        assert_eq!(err.to_string(), "key validation failed: HTTP 401");
    }
}
