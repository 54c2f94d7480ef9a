//! Property-based tests for the field validators.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use fieldguard::password::{validate_password, PasswordPolicyOptions};
use fieldguard::{
    is_in_range, is_required, is_valid_cpf, is_valid_email, is_valid_password, is_valid_phone, Cpf,
};
use proptest::prelude::*;

/// Non-empty run with no whitespace and no `@`.
fn email_part() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9._%+!-]{1,12}"
}

prop_compose! {
    fn valid_cpf()(base in prop::collection::vec(0u8..10, 9)) -> String {
        let mut digits = base;
        for len in [9usize, 10] {
            let sum: u32 = digits
                .iter()
                .zip((2..=len as u32 + 1).rev())
                .map(|(&d, w)| u32::from(d) * w)
                .sum();
            let r = (sum * 10) % 11;
            digits.push(if r == 10 { 0 } else { r as u8 });
        }
        digits.iter().map(|d| d.to_string()).collect()
    }
}

prop_compose! {
    fn any_policy()(
        min_length in 1usize..16,
        require_numbers in any::<bool>(),
        require_special_chars in any::<bool>(),
        require_uppercase in any::<bool>(),
        require_lowercase in any::<bool>()
    ) -> PasswordPolicyOptions {
        PasswordPolicyOptions {
            min_length,
            require_numbers,
            require_special_chars,
            require_uppercase,
            require_lowercase,
        }
    }
}

proptest! {
    #[test]
    fn strings_without_at_are_never_emails(s in "[^@]*") {
        prop_assert!(!is_valid_email(s.as_str()));
    }

    #[test]
    fn simple_shape_is_always_an_email(
        a in email_part(),
        b in email_part(),
        c in email_part()
    ) {
        let email = format!("{}@{}.{}", a, b, c);
        prop_assert!(is_valid_email(email.as_str()), "{} was rejected", email);
    }

    #[test]
    fn generated_cpfs_pass(cpf in valid_cpf()) {
        // Repeated sequences such as 000.000.000-00 are the only exception.
        let repeated = cpf.chars().all(|c| Some(c) == cpf.chars().next());
        prop_assert_eq!(is_valid_cpf(cpf.as_str()), !repeated);
    }

    #[test]
    fn cpf_punctuation_is_ignored(cpf in valid_cpf()) {
        let masked = format!("{}.{}.{}-{}", &cpf[0..3], &cpf[3..6], &cpf[6..9], &cpf[9..11]);
        prop_assert_eq!(is_valid_cpf(masked.as_str()), is_valid_cpf(cpf.as_str()));
    }

    #[test]
    fn cpf_display_round_trips(cpf in valid_cpf()) {
        if let Ok(parsed) = Cpf::try_from(cpf.as_str()) {
            let reparsed = Cpf::try_from(parsed.to_string()).unwrap();
            prop_assert_eq!(parsed, reparsed);
        }
    }

    #[test]
    fn altering_one_check_digit_invalidates_cpf(cpf in valid_cpf(), bump in 1u8..10) {
        let mut digits: Vec<u8> = cpf.bytes().map(|b| b - b'0').collect();
        digits[10] = (digits[10] + bump) % 10;
        let altered: String = digits.iter().map(|d| d.to_string()).collect();
        prop_assert!(!is_valid_cpf(altered.as_str()));
    }

    #[test]
    fn phone_validity_depends_only_on_digit_count(
        digits in "[0-9]{0,14}",
        punctuation in "[ ()+.-]{0,4}"
    ) {
        let phone = format!("{}{}", punctuation, digits);
        let expected = digits.len() == 10 || digits.len() == 11;
        prop_assert_eq!(is_valid_phone(phone.as_str()), expected);
    }

    #[test]
    fn whitespace_only_text_is_never_present(s in "[ \t\n\r]*") {
        prop_assert!(!is_required(s.as_str()));
    }

    #[test]
    fn numbers_within_bounds_are_in_range(n in -1000.0f64..1000.0) {
        prop_assert!(is_in_range(n, -1000.0, 1000.0));
        prop_assert!(is_in_range(n.to_string(), -1000.0, 1000.0));
        prop_assert!(!is_in_range(n, 1000.5, 2000.0));
    }

    #[test]
    fn report_errors_empty_iff_valid(password in ".{0,20}", options in any_policy()) {
        let report = validate_password(password.as_str(), &options);
        prop_assert_eq!(report.errors.is_empty(), report.is_valid);
        prop_assert!(report.errors.len() <= 5);
    }

    #[test]
    fn validators_are_idempotent(s in ".{0,24}", options in any_policy()) {
        prop_assert_eq!(is_valid_email(s.as_str()), is_valid_email(s.as_str()));
        prop_assert_eq!(is_valid_cpf(s.as_str()), is_valid_cpf(s.as_str()));
        prop_assert_eq!(is_valid_phone(s.as_str()), is_valid_phone(s.as_str()));
        prop_assert_eq!(is_required(s.as_str()), is_required(s.as_str()));
        prop_assert_eq!(is_in_range(s.as_str(), 0.0, 10.0), is_in_range(s.as_str(), 0.0, 10.0));
        prop_assert_eq!(is_valid_password(s.as_str()), is_valid_password(s.as_str()));
        prop_assert_eq!(
            validate_password(s.as_str(), &options),
            validate_password(s.as_str(), &options)
        );
    }
}
