//! Field validators.
//!
//! This module contains the stateless checks a registration form runs on
//! its fields:
//! - Email shape
//! - Phone digit count
//! - Required-value presence
//! - Inclusive numeric range
//!
//! Every check is a pure function of its arguments. Malformed input, such as
//! a number where text was expected, is just another failed check: nothing
//! here panics or returns an error.

mod email;
mod error;
mod phone;
mod range;
mod required;
mod value;

pub use email::is_valid_email;
pub use error::FieldError;
pub use phone::{is_valid_phone, Phone, PhoneKind};
pub use range::is_in_range;
pub use required::is_required;
pub use value::FieldValue;
