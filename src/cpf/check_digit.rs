//! Modulo-11 check digits used by CPF numbers.

/// Compute the check digit over the first `len` digits.
///
/// Weights run from `len + 1` down to 2, so the first check digit uses
/// weights 10..=2 over nine digits and the second uses 11..=2 over ten. A
/// remainder of 10 counts as 0.
pub fn check_digit(digits: &[u8], len: usize) -> u8 {
    let sum: u32 = digits[..len]
        .iter()
        .zip((2..=len as u32 + 1).rev())
        .map(|(&digit, weight)| u32::from(digit) * weight)
        .sum();

    match (sum * 10) % 11 {
        10 => 0,
        remainder => remainder as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [u8; 11] = [5, 2, 9, 9, 8, 2, 2, 4, 7, 2, 5];

    #[test]
    fn first_check_digit_uses_nine_digits() {
        assert_eq!(check_digit(&SAMPLE, 9), 2);
    }

    #[test]
    fn second_check_digit_includes_the_first() {
        assert_eq!(check_digit(&SAMPLE, 10), 5);
    }

    #[test]
    fn remainder_of_ten_clamps_to_zero() {
        // 000000006: sum 12, (12 * 10) % 11 = 10
        assert_eq!(check_digit(&[0, 0, 0, 0, 0, 0, 0, 0, 6], 9), 0);
        assert_eq!(check_digit(&[0, 0, 0, 0, 0, 0, 0, 0, 1], 9), 9);
    }
}
