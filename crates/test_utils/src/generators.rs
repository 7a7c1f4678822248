//! Property-Based Test Generators
//!
//! Proptest strategies for registration inputs, both valid and invalid.

use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for valid DNI numbers (8 digits)
pub fn dni_strategy() -> impl Strategy<Value = String> {
    "[0-9]{8}"
}

/// Strategy for valid RUC numbers (11 digits)
pub fn ruc_strategy() -> impl Strategy<Value = String> {
    "[0-9]{11}"
}

/// Strategy for digit strings of any length except `valid_len`
pub fn wrong_length_digits_strategy(valid_len: usize) -> impl Strategy<Value = String> {
    (0usize..20)
        .prop_filter("length must differ", move |len| *len != valid_len)
        .prop_flat_map(|len| proptest::collection::vec(0u8..10, len))
        .prop_map(|digits| digits.into_iter().map(|d| char::from(b'0' + d)).collect())
}

/// Strategy for strings of the right length that contain a non-digit
pub fn non_digit_document_strategy(len: usize) -> impl Strategy<Value = String> {
    (
        proptest::collection::vec(0u8..10, len),
        0..len,
        prop_oneof![Just('A'), Just('x'), Just('-'), Just(' '), Just('.')],
    )
        .prop_map(|(digits, position, bad)| {
            digits
                .into_iter()
                .enumerate()
                .map(|(i, d)| if i == position { bad } else { char::from(b'0' + d) })
                .collect()
        })
}

/// Strategy for positive salaries with two decimal places
pub fn salary_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for salaries at or above `minimum`
pub fn salary_at_least_strategy(minimum: Decimal) -> impl Strategy<Value = Decimal> {
    (0i64..5_000_000i64).prop_map(move |cents| minimum + Decimal::new(cents, 2))
}

/// Strategy for positive salaries strictly below `minimum`
pub fn salary_below_strategy(minimum: Decimal) -> impl Strategy<Value = Decimal> {
    let ceiling = (minimum * Decimal::ONE_HUNDRED)
        .trunc()
        .try_into()
        .unwrap_or(1i64)
        .max(2);
    (1i64..ceiling).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for zero or negative salaries
pub fn non_positive_salary_strategy() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..=0i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for contract types in mixed case, padded with whitespace
pub fn contract_type_input_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("INDEFINIDO"), Just("FIJO"), Just("PRACTICANTE")],
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(code, lower, padded)| {
            let code = if lower {
                code.to_lowercase()
            } else {
                code.to_string()
            };
            if padded {
                format!("  {}  ", code)
            } else {
                code
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    proptest! {
        #[test]
        fn test_dni_strategy_generates_eight_digits(dni in dni_strategy()) {
            prop_assert_eq!(dni.len(), 8);
            prop_assert!(dni.chars().all(|c| c.is_ascii_digit()));
        }

        #[test]
        fn test_wrong_length_never_matches(doc in wrong_length_digits_strategy(8)) {
            prop_assert_ne!(doc.len(), 8);
        }

        #[test]
        fn test_non_digit_document_has_right_length(doc in non_digit_document_strategy(11)) {
            prop_assert_eq!(doc.chars().count(), 11);
            prop_assert!(!doc.chars().all(|c| c.is_ascii_digit()));
        }

        #[test]
        fn test_salary_below_minimum(salary in salary_below_strategy(dec!(1130))) {
            prop_assert!(salary > Decimal::ZERO);
            prop_assert!(salary < dec!(1130));
        }
    }
}
