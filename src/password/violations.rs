//! Password rule violations.

use thiserror::Error;

/// Characters accepted by the special-character rule.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// A single failed password rule.
///
/// The `Display` text is the message shown next to the password field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordViolation {
    #[error("A senha é obrigatória")]
    Missing,

    #[error("A senha deve ter pelo menos {min_length} caracteres")]
    TooShort { min_length: usize },

    #[error("A senha deve conter pelo menos um número")]
    MissingNumber,

    #[error("A senha deve conter pelo menos um caractere especial")]
    MissingSpecialChar,

    #[error("A senha deve conter pelo menos uma letra maiúscula")]
    MissingUppercase,

    #[error("A senha deve conter pelo menos uma letra minúscula")]
    MissingLowercase,
}

impl PasswordViolation {
    /// Stable rule identifier for logging.
    pub fn rule(&self) -> &'static str {
        match self {
            Self::Missing => "required",
            Self::TooShort { .. } => "min_length",
            Self::MissingNumber => "require_numbers",
            Self::MissingSpecialChar => "require_special_chars",
            Self::MissingUppercase => "require_uppercase",
            Self::MissingLowercase => "require_lowercase",
        }
    }
}
