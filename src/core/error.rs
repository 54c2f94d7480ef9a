//! Errors raised when building checked field types.

use thiserror::Error;

/// A string could not be turned into a checked field type.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("CPF inválido")]
    InvalidCpf,

    #[error("Telefone inválido")]
    InvalidPhone,
}
