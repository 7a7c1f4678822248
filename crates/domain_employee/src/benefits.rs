//! Computed employment benefits

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EmployeeError;

/// CTS, gratification and vacation entitlement of an employee
///
/// Amounts are rounded to two decimal places on construction. No component
/// is ever negative; equality is structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Benefits {
    cts: Decimal,
    gratification: Decimal,
    vacation_days: i32,
}

impl Benefits {
    /// Zero value assigned before benefits are calculated
    pub const ZERO: Benefits = Benefits {
        cts: Decimal::ZERO,
        gratification: Decimal::ZERO,
        vacation_days: 0,
    };

    pub fn new(
        cts: Decimal,
        gratification: Decimal,
        vacation_days: i32,
    ) -> Result<Self, EmployeeError> {
        if cts < Decimal::ZERO {
            return Err(EmployeeError::BenefitPolicy(format!("CTS cannot be negative: {}", cts)));
        }
        if gratification < Decimal::ZERO {
            return Err(EmployeeError::BenefitPolicy(format!(
                "gratification cannot be negative: {}",
                gratification
            )));
        }
        if vacation_days < 0 {
            return Err(EmployeeError::BenefitPolicy(format!(
                "vacation days cannot be negative: {}",
                vacation_days
            )));
        }

        Ok(Self {
            cts: cts.round_dp(2),
            gratification: gratification.round_dp(2),
            vacation_days,
        })
    }

    /// Compensación por Tiempo de Servicios
    pub fn cts(&self) -> Decimal {
        self.cts
    }

    pub fn gratification(&self) -> Decimal {
        self.gratification
    }

    pub fn vacation_days(&self) -> i32 {
        self.vacation_days
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rejects_negative_components() {
        assert!(Benefits::new(dec!(-0.01), dec!(0), 0).is_err());
        assert!(Benefits::new(dec!(0), dec!(-1), 0).is_err());
        assert!(Benefits::new(dec!(0), dec!(0), -1).is_err());
    }

    #[test]
    fn test_rounds_to_cents() {
        let benefits = Benefits::new(dec!(486.1111111), dec!(5000), 30).unwrap();
        assert_eq!(benefits.cts(), dec!(486.11));
    }

    #[test]
    fn test_structural_equality() {
        let a = Benefits::new(dec!(10.00), dec!(20), 30).unwrap();
        let b = Benefits::new(dec!(10), dec!(20.00), 30).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Benefits::ZERO);
        assert!(Benefits::default().is_zero());
    }
}
