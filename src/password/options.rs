//! Password policy options and their builder.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Fully populated password policy.
///
/// Callers never hand the rule engine a partial policy: overrides are merged
/// onto [`PasswordPolicyOptions::default`] first, either through
/// [`PasswordPolicyBuilder`] or by deserializing a JSON document in which
/// every omitted key keeps its default.
///
/// # Example
///
/// ```rust
/// use fieldguard::password::PasswordPolicyOptions;
///
/// let options = PasswordPolicyOptions::from_json(r#"{ "requireUppercase": true }"#).unwrap();
///
/// assert_eq!(options.min_length, 8);
/// assert!(options.require_numbers);
/// assert!(options.require_special_chars);
/// assert!(options.require_uppercase);
/// assert!(!options.require_lowercase);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PasswordPolicyOptions {
    /// Minimum number of characters
    pub min_length: usize,

    /// At least one ASCII digit
    pub require_numbers: bool,

    /// At least one character from [`SPECIAL_CHARS`](super::SPECIAL_CHARS)
    pub require_special_chars: bool,

    /// At least one `A-Z`
    pub require_uppercase: bool,

    /// At least one `a-z`
    pub require_lowercase: bool,
}

impl Default for PasswordPolicyOptions {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            require_numbers: true,
            require_special_chars: true,
            require_uppercase: false,
            require_lowercase: false,
        }
    }
}

impl PasswordPolicyOptions {
    /// Start a builder from the default policy.
    pub fn builder() -> PasswordPolicyBuilder {
        PasswordPolicyBuilder::new()
    }

    /// Load a policy from a JSON object with camelCase keys.
    ///
    /// Missing keys fall back to the defaults. A `minLength` of zero is
    /// rejected.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_json::from_str(document)?;
        options.checked()
    }

    fn checked(self) -> Result<Self, ConfigError> {
        if self.min_length == 0 {
            return Err(ConfigError::InvalidMinLength);
        }
        Ok(self)
    }
}

/// Builder for password policies. Every option starts at its default.
#[derive(Clone, Debug, Default)]
pub struct PasswordPolicyBuilder {
    options: PasswordPolicyOptions,
}

impl PasswordPolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_length(mut self, n: usize) -> Self {
        self.options.min_length = n;
        self
    }

    pub fn require_numbers(mut self, required: bool) -> Self {
        self.options.require_numbers = required;
        self
    }

    pub fn require_special_chars(mut self, required: bool) -> Self {
        self.options.require_special_chars = required;
        self
    }

    pub fn require_uppercase(mut self, required: bool) -> Self {
        self.options.require_uppercase = required;
        self
    }

    pub fn require_lowercase(mut self, required: bool) -> Self {
        self.options.require_lowercase = required;
        self
    }

    /// Build the policy, rejecting a zero minimum length
    pub fn build(self) -> Result<PasswordPolicyOptions, ConfigError> {
        self.options.checked()
    }
}
