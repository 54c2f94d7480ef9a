//! Email shape check.

use super::value::FieldValue;
use regex::Regex;
use std::sync::LazyLock;

/// `local@domain.tld` where no part holds whitespace or a second `@`.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

/// Check that a value looks like an email address.
///
/// This is a permissive shape check, not RFC 5322 validation. Leading and
/// trailing whitespace is ignored; case and internationalized domains are
/// left alone.
///
/// # Example
///
/// ```rust
/// use fieldguard::is_valid_email;
///
/// assert!(is_valid_email("responsavel@escola.com.br"));
/// assert!(is_valid_email("  a@b.c  "));
/// assert!(!is_valid_email("sem-arroba.com"));
/// assert!(!is_valid_email(None::<&str>));
/// ```
pub fn is_valid_email(value: impl Into<FieldValue>) -> bool {
    let value = value.into();
    let Some(text) = value.as_text() else {
        log::trace!("email rejected: {} is not text", value.kind());
        return false;
    };

    if text.is_empty() {
        return false;
    }

    EMAIL_SHAPE.is_match(text.trim())
}
