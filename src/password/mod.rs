//! Password policy validation.
//!
//! Rules are evaluated with Stillwater's `Validation` type so a single pass
//! reports ALL violated rules instead of stopping at the first one. The form
//! shows the whole list at once.
//!
//! Two entry points share one rule-evaluation routine:
//! - [`validate_password`] returns a [`ValidationReport`] with every message
//! - [`is_valid_password`] checks against the default policy and returns a `bool`
//!
//! # Example
//!
//! ```rust
//! use fieldguard::password::{validate_password, PasswordPolicyOptions};
//!
//! let options = PasswordPolicyOptions::builder()
//!     .min_length(10)
//!     .require_uppercase(true)
//!     .build()
//!     .unwrap();
//!
//! let report = validate_password("curta1!", &options);
//! assert_eq!(
//!     report.errors,
//!     vec![
//!         "A senha deve ter pelo menos 10 caracteres",
//!         "A senha deve conter pelo menos uma letra maiúscula",
//!     ]
//! );
//! ```

pub mod error;
pub mod options;
pub mod report;
pub mod rules;
pub mod violations;

pub use error::ConfigError;
pub use options::{PasswordPolicyBuilder, PasswordPolicyOptions, DEFAULT_MIN_LENGTH};
pub use report::ValidationReport;
pub use rules::{check_password, is_valid_password, validate_password};
pub use violations::{PasswordViolation, SPECIAL_CHARS};
