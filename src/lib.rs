//! Fieldguard: pure validators for registration forms
//!
//! Fieldguard holds the input checks a school-transport registration flow
//! runs before anything is sent to the backend. Every validator is a pure,
//! synchronous function of its arguments: no state between calls, no I/O,
//! and any number of callers may use them concurrently.
//!
//! # Core Concepts
//!
//! - **Field validators**: email shape, phone digit count, required value,
//!   inclusive numeric range
//! - **Password policy**: configurable rules evaluated with Stillwater's
//!   `Validation`, reporting every violation at once
//! - **CPF**: Brazilian taxpayer-ID check digits
//!
//! Invalid input never panics and never returns an error: a value of the
//! wrong type, an empty string and a rule violation all read as "invalid".
//!
//! # Example
//!
//! ```rust
//! use fieldguard::{is_in_range, is_required, is_valid_cpf, is_valid_email, is_valid_phone};
//! use fieldguard::password::{validate_password, PasswordPolicyOptions};
//!
//! assert!(is_valid_email("mae.do.aluno@example.com"));
//! assert!(is_valid_cpf("529.982.247-25"));
//! assert!(is_valid_phone("(11) 91234-5678"));
//! assert!(is_required("Rua das Flores, 100"));
//! assert!(is_in_range("7", 4.0, 17.0));
//!
//! let report = validate_password("abc", &PasswordPolicyOptions::default());
//! assert!(!report.is_valid);
//! assert_eq!(report.errors.len(), 3);
//! ```

pub mod core;
pub mod cpf;
pub mod password;

// Re-export commonly used types
pub use crate::core::{
    is_in_range, is_required, is_valid_email, is_valid_phone, FieldError, FieldValue, Phone,
    PhoneKind,
};
pub use cpf::{is_valid_cpf, Cpf};
pub use password::{
    is_valid_password, validate_password, PasswordPolicyOptions, ValidationReport,
};
