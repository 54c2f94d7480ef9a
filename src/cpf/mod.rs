//! CPF (Cadastro de Pessoas Físicas) validation.
//!
//! A CPF is eleven digits, the last two being modulo-11 check digits over
//! the digits before them. Formatting punctuation (`529.982.247-25`) is
//! ignored. Well-formed numbers made of one repeated digit
//! (`111.111.111-11`) pass the arithmetic but are never issued, so they are
//! rejected.

mod check_digit;

use crate::core::{FieldError, FieldValue};
use check_digit::check_digit;
use std::fmt;

const CPF_LEN: usize = 11;

fn parse_digits(text: &str) -> Vec<u8> {
    text.chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect()
}

fn digits_are_valid(digits: &[u8]) -> bool {
    if digits.len() != CPF_LEN {
        log::trace!("cpf rejected: {} digits", digits.len());
        return false;
    }

    if digits.iter().all(|&d| d == digits[0]) {
        log::trace!("cpf rejected: repeated digit sequence");
        return false;
    }

    if check_digit(digits, 9) != digits[9] {
        log::trace!("cpf rejected: first check digit mismatch");
        return false;
    }

    if check_digit(digits, 10) != digits[10] {
        log::trace!("cpf rejected: second check digit mismatch");
        return false;
    }

    true
}

/// Check that a value is a CPF with correct check digits.
///
/// # Example
///
/// ```rust
/// use fieldguard::is_valid_cpf;
///
/// assert!(is_valid_cpf("529.982.247-25"));
/// assert!(is_valid_cpf("52998224725"));
/// assert!(!is_valid_cpf("52998224726"));
/// assert!(!is_valid_cpf("111.111.111-11"));
/// ```
pub fn is_valid_cpf(value: impl Into<FieldValue>) -> bool {
    let value = value.into();
    match value.as_text() {
        Some(text) if !text.is_empty() => digits_are_valid(&parse_digits(text)),
        _ => {
            log::trace!("cpf rejected: {} is not non-empty text", value.kind());
            false
        }
    }
}

/// A CPF that passed [`is_valid_cpf`], stored as its eleven digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf(String);

impl Cpf {
    /// The bare digits, without punctuation.
    pub fn digits(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Cpf {
    type Error = FieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let digits = parse_digits(value);
        if value.is_empty() || !digits_are_valid(&digits) {
            return Err(FieldError::InvalidCpf);
        }
        Ok(Self(digits.iter().map(|d| char::from(b'0' + d)).collect()))
    }
}

impl TryFrom<String> for Cpf {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Canonical `XXX.XXX.XXX-XX` mask.
impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.0;
        write!(f, "{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
    }
}
