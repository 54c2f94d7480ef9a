//! Presence check for mandatory fields.

use super::value::FieldValue;

/// Check that a mandatory field was filled in.
///
/// `Null`, whitespace-only text and empty lists count as missing. Anything
/// else is present, including `0`, `false` and an empty map.
///
/// # Example
///
/// ```rust
/// use fieldguard::is_required;
///
/// assert!(is_required("Escola Municipal"));
/// assert!(is_required(0));
/// assert!(!is_required("   "));
/// assert!(!is_required(None::<&str>));
/// ```
pub fn is_required(value: impl Into<FieldValue>) -> bool {
    match value.into() {
        FieldValue::Null => false,
        FieldValue::Text(text) => !text.trim().is_empty(),
        FieldValue::List(items) => !items.is_empty(),
        FieldValue::Bool(_) | FieldValue::Number(_) | FieldValue::Map(_) => true,
    }
}
