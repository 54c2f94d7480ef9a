//! Password rule evaluation using Validation.

use super::options::PasswordPolicyOptions;
use super::report::ValidationReport;
use super::violations::{PasswordViolation, SPECIAL_CHARS};
use crate::core::FieldValue;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type RuleCheck = Validation<(), NonEmptyVec<PasswordViolation>>;

fn rule(passes: bool, violation: PasswordViolation) -> RuleCheck {
    if passes {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

/// Evaluate every enabled rule, accumulating ALL violations.
///
/// A missing or non-text value fails with [`PasswordViolation::Missing`]
/// alone. Otherwise the rules run in a fixed order (length, digit, special
/// character, uppercase, lowercase) and each failing rule contributes exactly
/// one violation.
pub fn check_password(value: &FieldValue, options: &PasswordPolicyOptions) -> RuleCheck {
    let Some(password) = value.as_text() else {
        log::debug!("password rejected: {} is not text", value.kind());
        return Validation::fail(PasswordViolation::Missing);
    };

    let mut checks: Vec<RuleCheck> = vec![rule(
        password.chars().count() >= options.min_length,
        PasswordViolation::TooShort {
            min_length: options.min_length,
        },
    )];

    if options.require_numbers {
        checks.push(rule(
            password.chars().any(|c| c.is_ascii_digit()),
            PasswordViolation::MissingNumber,
        ));
    }

    if options.require_special_chars {
        checks.push(rule(
            password.chars().any(|c| SPECIAL_CHARS.contains(c)),
            PasswordViolation::MissingSpecialChar,
        ));
    }

    if options.require_uppercase {
        checks.push(rule(
            password.chars().any(|c| c.is_ascii_uppercase()),
            PasswordViolation::MissingUppercase,
        ));
    }

    if options.require_lowercase {
        checks.push(rule(
            password.chars().any(|c| c.is_ascii_lowercase()),
            PasswordViolation::MissingLowercase,
        ));
    }

    let result = Validation::all_vec(checks).map(|_| ());
    if let Validation::Failure(violations) = &result {
        let rules: Vec<&str> = violations.iter().map(PasswordViolation::rule).collect();
        log::debug!("password rejected by rules {:?}", rules);
    }
    result
}

/// Check a password against a policy and report every violated rule.
///
/// # Example
///
/// ```rust
/// use fieldguard::password::{validate_password, PasswordPolicyOptions};
///
/// let report = validate_password("abc", &PasswordPolicyOptions::default());
/// assert!(!report.is_valid);
/// assert_eq!(report.errors.len(), 3);
///
/// let strict = PasswordPolicyOptions::builder()
///     .require_uppercase(true)
///     .require_lowercase(true)
///     .build()
///     .unwrap();
/// let report = validate_password("Abcdef1!", &strict);
/// assert!(report.is_valid);
/// assert!(report.errors.is_empty());
/// ```
pub fn validate_password(
    value: impl Into<FieldValue>,
    options: &PasswordPolicyOptions,
) -> ValidationReport {
    check_password(&value.into(), options).into()
}

/// Check a password against the default policy.
///
/// ```rust
/// use fieldguard::is_valid_password;
///
/// assert!(is_valid_password("senha123!"));
/// assert!(!is_valid_password("senha123"));
/// ```
pub fn is_valid_password(value: impl Into<FieldValue>) -> bool {
    validate_password(value, &PasswordPolicyOptions::default()).is_valid
}
