//! Password policy configuration errors.

use thiserror::Error;

/// Errors that can occur when building or loading a password policy.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("minLength must be a positive integer")]
    InvalidMinLength,

    /// The policy document is not valid JSON or has mistyped keys
    #[error("Invalid password policy document: {0}")]
    Parse(#[from] serde_json::Error),
}
