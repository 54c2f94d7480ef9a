//! Inclusive numeric range check.

use super::value::FieldValue;

/// Coerce a field to a number. Text is trimmed and parsed as a float; other
/// non-numeric variants have no numeric reading.
fn coerce_number(value: &FieldValue) -> Option<f64> {
    let number = match value {
        FieldValue::Number(n) => *n,
        FieldValue::Text(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if number.is_nan() {
        None
    } else {
        Some(number)
    }
}

/// Check that a value reads as a number within `[min, max]`.
///
/// Both bounds are inclusive. A `min` greater than `max` makes the range
/// empty, so nothing passes.
///
/// # Example
///
/// ```rust
/// use fieldguard::is_in_range;
///
/// assert!(is_in_range("5", 1.0, 10.0));
/// assert!(is_in_range(10, 1.0, 10.0));
/// assert!(!is_in_range("abc", 1.0, 10.0));
/// ```
pub fn is_in_range(value: impl Into<FieldValue>, min: f64, max: f64) -> bool {
    let value = value.into();
    match coerce_number(&value) {
        Some(number) => number >= min && number <= max,
        None => {
            log::trace!("range rejected: {} has no numeric reading", value.kind());
            false
        }
    }
}
