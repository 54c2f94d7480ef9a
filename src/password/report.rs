//! Password validation report.

use super::violations::PasswordViolation;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Verdict plus every violated rule, in check order.
///
/// `errors` is empty exactly when `is_valid` is true. The report serializes
/// as `{ "isValid": bool, "errors": [..] }` for form layers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Build an invalid report from violations. An empty iterator yields a
    /// valid report so the `errors`/`is_valid` pairing cannot drift.
    pub fn from_violations<'a, I>(violations: I) -> Self
    where
        I: IntoIterator<Item = &'a PasswordViolation>,
    {
        let errors: Vec<String> = violations.into_iter().map(ToString::to_string).collect();
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// The message to show first under the field, if any.
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }
}

impl From<Validation<(), NonEmptyVec<PasswordViolation>>> for ValidationReport {
    fn from(validation: Validation<(), NonEmptyVec<PasswordViolation>>) -> Self {
        match validation {
            Validation::Success(()) => Self::valid(),
            Validation::Failure(violations) => Self::from_violations(violations.iter()),
        }
    }
}
