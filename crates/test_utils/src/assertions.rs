//! Custom Test Assertions
//!
//! Assertion helpers for domain types that give more meaningful error
//! messages than standard assertions.

use std::fmt::Debug;

use core_kernel::{Classify, ErrorKind};
use domain_employee::Benefits;
use rust_decimal::Decimal;

/// Asserts that two decimals differ by at most `tolerance`
///
/// # Panics
///
/// Panics if the difference exceeds the tolerance
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that a result failed with an error of the given kind
///
/// # Panics
///
/// Panics if the result is `Ok` or the error is of another kind
pub fn assert_error_kind<T: Debug, E: Classify + Debug>(result: &Result<T, E>, expected: ErrorKind) {
    match result {
        Ok(value) => panic!("Expected {} error, got Ok({:?})", expected, value),
        Err(err) => assert_eq!(
            err.kind(),
            expected,
            "Expected {} error, got {:?}",
            expected,
            err
        ),
    }
}

/// Asserts that neither CTS nor gratification was granted
pub fn assert_no_monetary_benefits(benefits: &Benefits) {
    assert!(
        benefits.cts().is_zero() && benefits.gratification().is_zero(),
        "Expected no monetary benefits, got cts={} gratification={}",
        benefits.cts(),
        benefits.gratification()
    );
}

/// Asserts that all benefit components are non-negative
pub fn assert_benefits_non_negative(benefits: &Benefits) {
    assert!(
        benefits.cts() >= Decimal::ZERO
            && benefits.gratification() >= Decimal::ZERO
            && benefits.vacation_days() >= 0,
        "Benefits must not be negative: {:?}",
        benefits
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::PortError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decimal_approx_eq() {
        assert_decimal_approx_eq(dec!(486.111), dec!(486.11), dec!(0.01));
    }

    #[test]
    #[should_panic(expected = "differ by more than tolerance")]
    fn test_decimal_approx_eq_fails() {
        assert_decimal_approx_eq(dec!(480), dec!(486.11), dec!(0.01));
    }

    #[test]
    fn test_error_kind() {
        let result: Result<(), PortError> = Err(PortError::conflict("taken"));
        assert_error_kind(&result, ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_zero_benefits() {
        assert_no_monetary_benefits(&Benefits::ZERO);
        assert_benefits_non_negative(&Benefits::ZERO);
    }
}
