//! Brazilian phone number checks.
//!
//! Only the digit count matters: 10 digits for a landline (area code plus
//! eight digits) and 11 for a mobile. Punctuation such as `(11) 91234-5678`
//! is ignored, and area codes are not checked against any range.

use super::error::FieldError;
use super::value::FieldValue;
use std::fmt;

const LANDLINE_DIGITS: usize = 10;
const MOBILE_DIGITS: usize = 11;

fn digits_of(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Check that a value carries exactly 10 or 11 digits.
///
/// # Example
///
/// ```rust
/// use fieldguard::is_valid_phone;
///
/// assert!(is_valid_phone("(11) 91234-5678"));
/// assert!(is_valid_phone("1132345678"));
/// assert!(!is_valid_phone("123456789"));
/// ```
pub fn is_valid_phone(value: impl Into<FieldValue>) -> bool {
    let value = value.into();
    let Some(text) = value.as_text() else {
        log::trace!("phone rejected: {} is not text", value.kind());
        return false;
    };

    let count = text.chars().filter(|c| c.is_ascii_digit()).count();
    let valid = count == LANDLINE_DIGITS || count == MOBILE_DIGITS;
    if !valid {
        log::trace!("phone rejected: {} digits", count);
    }
    valid
}

/// Line type implied by the digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneKind {
    Landline,
    Mobile,
}

/// A phone number that passed [`is_valid_phone`], stored as bare digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn digits(&self) -> &str {
        &self.0
    }

    pub fn kind(&self) -> PhoneKind {
        if self.0.len() == MOBILE_DIGITS {
            PhoneKind::Mobile
        } else {
            PhoneKind::Landline
        }
    }

    /// The two-digit area code (DDD).
    pub fn area_code(&self) -> &str {
        &self.0[..2]
    }
}

impl TryFrom<&str> for Phone {
    type Error = FieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if is_valid_phone(value) {
            Ok(Self(digits_of(value)))
        } else {
            Err(FieldError::InvalidPhone)
        }
    }
}

impl TryFrom<String> for Phone {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (area, number) = self.0.split_at(2);
        let split = number.len() - 4;
        write!(f, "({}) {}-{}", area, &number[..split], &number[split..])
    }
}
